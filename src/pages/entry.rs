//! Entry route (`/`) that only ever redirects.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::session::SessionState;
use crate::util::auth::{RedirectGuard, redirect_from_entry};
use crate::util::storage::BrowserStorage;

/// Reconcile session and storage, then replace the history entry with the
/// matching home. Shows a spinner until the router swaps the page.
#[component]
pub fn EntryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let guard = RedirectGuard::new();

    Effect::new(move || {
        redirect_from_entry(&guard, &session, &BrowserStorage, |path, options| navigate(path, options));
    });

    view! {
        <div class="entry-page">
            <Spinner/>
        </div>
    }
}
