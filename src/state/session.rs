//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns one `RwSignal<SessionState>` and provides it as
//! context. Route logic reads it through [`SessionContext`] so the entry
//! redirector can be driven by a plain `SessionState` in tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{LoginResponse, SessionUser};
use crate::util::storage::{KeyValueStore, clear_credentials, read_credentials, write_credentials};

/// In-memory authentication state. Reset on logout and on reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user: Option<SessionUser>,
}

impl SessionState {
    pub fn authenticated(user: SessionUser) -> Self {
        Self { is_authenticated: true, user: Some(user) }
    }
}

/// Read-only accessor over whatever holds the session.
pub trait SessionContext {
    fn is_authenticated(&self) -> bool;
    fn user(&self) -> Option<SessionUser>;
}

impl SessionContext for SessionState {
    fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    fn user(&self) -> Option<SessionUser> {
        self.user.clone()
    }
}

impl SessionContext for RwSignal<SessionState> {
    fn is_authenticated(&self) -> bool {
        self.with(|s| s.is_authenticated)
    }

    fn user(&self) -> Option<SessionUser> {
        self.with(|s| s.user.clone())
    }
}

/// Initial session for a fresh page load, rebuilt from persisted credentials.
///
/// A missing token or an unparseable user blob yields a guest session.
pub fn restore_session(store: &impl KeyValueStore) -> SessionState {
    let creds = read_credentials(store);
    if !creds.is_complete() {
        return SessionState::default();
    }
    match creds.user() {
        Some(user) => {
            log::debug!("restored session for user {}", user.id);
            SessionState::authenticated(user)
        }
        None => SessionState::default(),
    }
}

/// Persist a successful login and return the session it establishes.
pub fn persist_login(store: &impl KeyValueStore, login: &LoginResponse) -> SessionState {
    write_credentials(store, &login.token, &login.user);
    log::info!("signed in as {} ({})", login.user.id, login.user.role);
    SessionState::authenticated(login.user.clone())
}

/// Drop persisted credentials and return the guest session.
pub fn logout(store: &impl KeyValueStore) -> SessionState {
    clear_credentials(store);
    log::info!("signed out");
    SessionState::default()
}
