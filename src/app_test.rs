use super::*;

#[test]
fn needs_user_fetch_for_fresh_token() {
    assert!(needs_user_fetch(Some("tok-1"), None));
}

#[test]
fn needs_user_fetch_skips_already_resolved_token() {
    assert!(!needs_user_fetch(Some("tok-1"), Some("tok-1")));
}

#[test]
fn needs_user_fetch_refetches_for_replaced_token() {
    assert!(needs_user_fetch(Some("tok-2"), Some("tok-1")));
}

#[test]
fn needs_user_fetch_never_runs_without_token() {
    assert!(!needs_user_fetch(None, None));
    assert!(!needs_user_fetch(None, Some("tok-1")));
}

#[test]
fn initial_session_without_persisted_token_is_signed_out() {
    // Outside the browser the token store is empty.
    assert_eq!(initial_session(), SessionState::default());
}
