use super::*;
use crate::test_helpers::MemoryStorage;
use crate::util::storage::{AUTH_TOKEN_KEY, USER_KEY};

fn customer() -> SessionUser {
    SessionUser { id: "u1".into(), role: "user".to_owned(), username: None }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_is_guest() {
    let state = SessionState::default();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn session_context_reads_plain_state() {
    let state = SessionState::authenticated(customer());
    assert!(SessionContext::is_authenticated(&state));
    assert_eq!(SessionContext::user(&state), Some(customer()));
}

// =============================================================
// restore / login / logout
// =============================================================

#[test]
fn restore_session_without_credentials_is_guest() {
    assert_eq!(restore_session(&MemoryStorage::new()), SessionState::default());
}

#[test]
fn restore_session_with_token_but_no_user_is_guest() {
    let store = MemoryStorage::new();
    store.set(AUTH_TOKEN_KEY, "tok");
    assert_eq!(restore_session(&store), SessionState::default());
}

#[test]
fn restore_session_with_malformed_user_is_guest() {
    let store = MemoryStorage::new();
    store.set(AUTH_TOKEN_KEY, "tok");
    store.set(USER_KEY, "{\"id\":");
    assert_eq!(restore_session(&store), SessionState::default());
}

#[test]
fn persist_login_then_restore_round_trips_user() {
    let store = MemoryStorage::new();
    let login = LoginResponse { token: "tok".to_owned(), user: customer() };
    let session = persist_login(&store, &login);
    assert_eq!(session, SessionState::authenticated(customer()));
    assert_eq!(restore_session(&store), session);
}

#[test]
fn logout_clears_storage() {
    let store = MemoryStorage::new();
    persist_login(&store, &LoginResponse { token: "tok".to_owned(), user: customer() });
    assert_eq!(logout(&store), SessionState::default());
    assert!(store.is_empty());
}
