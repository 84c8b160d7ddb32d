use super::*;

#[test]
fn success_statuses_pass() {
    for status in [200, 201, 204, 299] {
        assert_eq!(check_status(status), Ok(()));
    }
}

#[test]
fn other_statuses_become_status_errors() {
    for status in [199, 300, 400, 403, 404, 500] {
        assert_eq!(check_status(status), Err(ApiError::Status { status }));
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_off_the_browser() {
    let config = HostConfig {
        pdf_url: None,
        extraction_id: 1,
        csrf_token: String::new(),
        endpoints: Endpoints::default(),
    };
    let result = poll_ready(delete_quote(&config, 1));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that completes without suspending.
#[cfg(not(feature = "csr"))]
fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended"),
    }
}
