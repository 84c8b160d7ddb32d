use super::*;

#[test]
fn session_starts_loading() {
    let state = SessionState::default();
    assert_eq!(state.status, LoadStatus::Loading);
    assert!(!state.is_ready());
    assert!(!state.submitting);
    assert_eq!(state.deleting, None);
    assert_eq!(state.page_size, None);
}

#[test]
fn failure_message_only_when_failed() {
    let mut state = SessionState::default();
    assert_eq!(state.failure_message(), None);
    state.status = LoadStatus::Ready;
    assert_eq!(state.failure_message(), None);
    state.status = LoadStatus::Failed(InitError::MissingDocument);
    assert_eq!(state.failure_message().as_deref(), Some("No PDF file available for this study"));
}
