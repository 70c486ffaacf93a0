use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(3);
    assert_eq!(limits.depth, 3);
    assert!(!limits.should_stop());
}

#[test]
fn test_cancel_is_shared_between_clones() {
    let token = CancelToken::new();
    let limits = SearchLimits::with_cancel(2, token.clone());
    assert!(!limits.should_stop());

    token.cancel();
    assert!(limits.should_stop());
    assert!(limits.cancel.is_cancelled());
}

#[test]
fn test_cancel_from_another_thread() {
    let token = CancelToken::new();
    let remote = token.clone();
    thread::spawn(move || remote.cancel())
        .join()
        .expect("cancelling thread panicked");
    assert!(token.is_cancelled());
}

#[test]
fn test_fresh_limits_are_independent() {
    let a = SearchLimits::depth(1);
    let b = SearchLimits::depth(1);
    a.cancel.cancel();
    assert!(a.should_stop());
    assert!(!b.should_stop());
}
