//! Entry-route auth reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `/` route never renders content. It compares the in-memory session
//! with persisted credentials and sends the visitor to the shop dashboard,
//! the customer home, or the guest home. Authenticated destinations are
//! only chosen when both sources agree on the user's role; anything else,
//! including an unreadable stored user, is treated as a guest.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::Cell;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::pages::LOGIN_PATH;
use crate::state::session::{SessionContext, SessionState};
use crate::util::storage::{KeyValueStore, read_credentials};

pub const GUEST_HOME_PATH: &str = "/home";
pub const USER_HOME_PATH: &str = "/user/home";
pub const SHOP_DASHBOARD_PATH: &str = "/shop/dashboard";

/// Where the entry route sends the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    ShopDashboard,
    Home,
    GuestHome,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::ShopDashboard => SHOP_DASHBOARD_PATH,
            Self::Home => USER_HOME_PATH,
            Self::GuestHome => GUEST_HOME_PATH,
        }
    }
}

/// Decide the entry destination from the session and persisted credentials.
pub fn resolve_entry_destination(session: &impl SessionContext, store: &impl KeyValueStore) -> Destination {
    let creds = read_credentials(store);
    if !session.is_authenticated() || !creds.is_complete() {
        return Destination::GuestHome;
    }
    let Some(session_user) = session.user() else {
        return Destination::GuestHome;
    };

    // Malformed blobs were already logged by `parse_or_none`.
    let Some(stored_user) = creds.user() else {
        return Destination::GuestHome;
    };

    if stored_user.role != session_user.role {
        log::warn!(
            "session role {:?} disagrees with stored role {:?}; treating visitor as guest",
            session_user.role,
            stored_user.role
        );
        return Destination::GuestHome;
    }

    if session_user.is_shop() { Destination::ShopDashboard } else { Destination::Home }
}

/// One-shot latch so a re-running effect navigates at most once.
#[derive(Debug, Default)]
pub struct RedirectGuard {
    started: Cell<bool>,
}

impl RedirectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time only.
    pub fn try_begin(&self) -> bool {
        !self.started.replace(true)
    }
}

/// Options for redirects that must not leave a back-button entry behind.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Resolve and navigate, at most once per guard.
///
/// Returns the destination when this call performed the navigation.
pub fn redirect_from_entry<S, K, F>(guard: &RedirectGuard, session: &S, store: &K, navigate: F) -> Option<Destination>
where
    S: SessionContext,
    K: KeyValueStore,
    F: FnOnce(&str, NavigateOptions),
{
    if !guard.try_begin() {
        return None;
    }
    let destination = resolve_entry_destination(session, store);
    log::debug!("entry redirect to {}", destination.path());
    navigate(destination.path(), replace_options());
    Some(destination)
}

/// Where a visitor who may not view `page` is sent instead, if anywhere.
///
/// Guests go to login; signed-in users who reach the other audience's home
/// go to their own.
pub fn access_redirect(session: &impl SessionContext, page: Destination) -> Option<&'static str> {
    if page == Destination::GuestHome {
        return None;
    }
    let user = session.user().filter(|_| session.is_authenticated());
    let Some(user) = user else {
        return Some(LOGIN_PATH);
    };
    match (page, user.is_shop()) {
        (Destination::ShopDashboard, false) => Some(USER_HOME_PATH),
        (Destination::Home, true) => Some(SHOP_DASHBOARD_PATH),
        _ => None,
    }
}

/// Keep `page` restricted to its audience for as long as it is mounted.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, page: Destination, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let Some(path) = access_redirect(&state, page) {
            log::debug!("{} is not available to this session; redirecting to {path}", page.path());
            navigate(path, replace_options());
        }
    });
}
