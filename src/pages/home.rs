//! Landing pages for the three audiences: guests, customers, and shops.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{LOGIN_PATH, REGISTER_PATH};
use crate::state::session::{SessionState, logout};
use crate::util::auth::{Destination, GUEST_HOME_PATH, install_unauth_redirect, replace_options};
use crate::util::storage::BrowserStorage;

#[component]
pub fn GuestHomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"PawCare"</h1>
            <p>"Grooming, boarding, and vet visits for your pets in one place."</p>
            <div class="home-page__actions">
                <a class="btn btn--primary" href=LOGIN_PATH>"Sign in"</a>
                <a class="btn" href=REGISTER_PATH>"Create an account"</a>
            </div>
        </div>
    }
}

#[component]
pub fn UserHomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, Destination::Home, use_navigate());

    view! {
        <div class="home-page">
            <h1>"Welcome back" {move || display_name(&session.get()).map(|n| format!(", {n}"))}</h1>
            <p>"Book a service or check on your upcoming appointments."</p>
            <LogoutButton/>
        </div>
    }
}

#[component]
pub fn ShopDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, Destination::ShopDashboard, use_navigate());

    view! {
        <div class="home-page home-page--shop">
            <h1>"Shop dashboard"</h1>
            <p>"Manage services, bookings, and staff."</p>
            <LogoutButton/>
        </div>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_click = move |_| {
        session.set(logout(&BrowserStorage));
        navigate(GUEST_HOME_PATH, replace_options());
    };

    view! {
        <button class="btn" type="button" on:click=on_click>
            "Sign out"
        </button>
    }
}

fn display_name(session: &SessionState) -> Option<String> {
    session.user.as_ref().and_then(|u| u.username.clone())
}
