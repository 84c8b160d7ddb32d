use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.push("Quote created successfully");
    let b = toasts.push("Quote deleted successfully");
    assert!(b > a);
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[0].message, "Quote created successfully");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut toasts = ToastState::default();
    let a = toasts.push("one");
    let b = toasts.push("two");
    assert!(toasts.dismiss(a));
    assert_eq!(toasts.items, vec![Toast { id: b, message: "two".to_owned() }]);
}

#[test]
fn dismissing_twice_is_harmless() {
    let mut toasts = ToastState::default();
    let a = toasts.push("one");
    assert!(toasts.dismiss(a));
    assert!(!toasts.dismiss(a));
    assert!(toasts.items.is_empty());
}
