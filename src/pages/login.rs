//! Username + password sign-in (`/login`).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::REGISTER_PATH;
use crate::components::spinner::Spinner;
use crate::config::ClientConfig;
use crate::net::api::{AccountApi, ApiError, HttpAccountApi};
use crate::net::types::LoginRequest;
use crate::state::session::{SessionState, persist_login};
use crate::state::toast::{Notice, Notifier, ToastNotifier};
use crate::util::auth::{Destination, replace_options, resolve_entry_destination};
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Log in, persist the credentials, and pick where to land.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the login call; nothing is stored then.
pub(crate) async fn sign_in<A, K>(api: &A, store: &K, request: &LoginRequest) -> Result<(SessionState, Destination), ApiError>
where
    A: AccountApi + ?Sized,
    K: KeyValueStore,
{
    let login = api.login(request).await?;
    let session = persist_login(store, &login);
    let destination = resolve_entry_destination(&session, store);
    Ok((session, destination))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = expect_context::<ToastNotifier>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        let api = HttpAccountApi::new(config.clone());
        leptos::task::spawn_local(async move {
            match sign_in(&api, &BrowserStorage, &request).await {
                Ok((next, destination)) => {
                    session.set(next);
                    navigate(destination.path(), replace_options());
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    notifier.notify(Notice::error(err.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="form-field__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
                <Show when=move || busy.get()>
                    <Spinner/>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "New here? " <a href=REGISTER_PATH>"Create an account"</a>
                </p>
            </form>
        </div>
    }
}
