//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::config::ClientConfig;
use crate::pages::entry::EntryPage;
use crate::pages::home::{GuestHomePage, ShopDashboardPage, UserHomePage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::register_profile::RegisterProfilePage;
use crate::state::registration::RegistrationFlow;
use crate::state::session::restore_session;
use crate::state::toast::{ToastNotifier, ToastState};
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides config, session, registration, and toast contexts, then routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        log::warn!("invalid client config, using defaults: {e}");
        ClientConfig::default()
    });

    let session = RwSignal::new(restore_session(&BrowserStorage));
    let toasts = RwSignal::new(ToastState::default());
    let notifier = ToastNotifier { state: toasts, duration_ms: config.toast_duration_ms };

    provide_context(config);
    provide_context(session);
    provide_context(toasts);
    provide_context(notifier);
    provide_context(RegistrationFlow::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/pawcare.css"/>
        <Title text="PawCare"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=EntryPage/>
                <Route path=StaticSegment("home") view=GuestHomePage/>
                <Route path=(StaticSegment("user"), StaticSegment("home")) view=UserHomePage/>
                <Route path=(StaticSegment("shop"), StaticSegment("dashboard")) view=ShopDashboardPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("register"), StaticSegment("profile")) view=RegisterProfilePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
