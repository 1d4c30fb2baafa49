//! Account step of registration (`/register`).
//!
//! Validates the credential form locally, creates the account, and hands
//! the returned record to the profile step through the shared
//! [`HandoffSlot`]. A rejected request keeps every typed value in place.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{LOGIN_PATH, REGISTER_PROFILE_PATH};
use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::net::api::HttpAccountApi;
use crate::state::registration::{
    HandoffSlot, RegistrationEvent, RegistrationFlow, RegistrationHandoff, SubmitError, submit_credentials,
};
use crate::state::toast::{Notice, Notifier, ToastNotifier};
use crate::util::validation::{CredentialField, CredentialsInput, FieldErrors, validate_credentials};

/// What the page does after an account submission finishes.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AccountSettled {
    /// Handoff stored; go to the profile step.
    Continue,
    Invalid(FieldErrors<CredentialField>),
    /// Server said no; the message was already shown.
    Rejected,
}

impl AccountSettled {
    pub(crate) fn event(&self) -> RegistrationEvent {
        match self {
            Self::Continue => RegistrationEvent::CredentialsAccepted,
            Self::Invalid(_) | Self::Rejected => RegistrationEvent::CredentialsRejected,
        }
    }
}

/// Store the handoff on success, or notify the failure.
pub(crate) fn settle_account_submit(
    result: Result<RegistrationHandoff, SubmitError<CredentialField>>,
    slot: &HandoffSlot,
    notifier: &impl Notifier,
) -> AccountSettled {
    match result {
        Ok(handoff) => {
            slot.put(handoff);
            AccountSettled::Continue
        }
        Err(SubmitError::Invalid(errors)) => AccountSettled::Invalid(errors),
        Err(SubmitError::Api(err)) => {
            log::warn!("account registration failed: {err}");
            notifier.notify(Notice::error(err.user_message()));
            AccountSettled::Rejected
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let flow = expect_context::<RegistrationFlow>();
    let notifier = expect_context::<ToastNotifier>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::<CredentialField>::new());
    let stage = flow.stage;

    // A fresh visit always starts at the form.
    flow.reset();

    let mounted = Arc::new(AtomicBool::new(true));
    {
        let mounted = Arc::clone(&mounted);
        on_cleanup(move || mounted.store(false, Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = CredentialsInput {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(found) = validate_credentials(&input) {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        if !flow.advance(RegistrationEvent::SubmitCredentials) {
            return;
        }

        let flow = flow.clone();
        let navigate = navigate.clone();
        let mounted = Arc::clone(&mounted);
        let api = HttpAccountApi::new(config.clone());
        leptos::task::spawn_local(async move {
            let result = submit_credentials(&api, &input).await;
            if !mounted.load(Ordering::Relaxed) {
                log::debug!("account step left before the request finished; ignoring result");
                return;
            }
            let settled = settle_account_submit(result, &flow.slot, &notifier);
            flow.advance(settled.event());
            match settled {
                AccountSettled::Continue => navigate(REGISTER_PROFILE_PATH, NavigateOptions::default()),
                AccountSettled::Invalid(found) => errors.set(found),
                AccountSettled::Rejected => {}
            }
        });
    };

    let field_error = move |field: CredentialField| Signal::derive(move || errors.with(|e| e.get(field)));

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Step 1 of 2"</p>
                <FormField label="Username" input_type="text" value=username error=field_error(CredentialField::Username)/>
                <FormField label="Email" input_type="email" value=email error=field_error(CredentialField::Email)/>
                <FormField label="Password" input_type="password" value=password error=field_error(CredentialField::Password)/>
                <FormField
                    label="Confirm password"
                    input_type="password"
                    value=confirm_password
                    error=field_error(CredentialField::ConfirmPassword)
                />
                <button class="btn btn--primary" type="submit" disabled=move || stage.get().is_submitting()>
                    {move || if stage.get().is_submitting() { "Creating account..." } else { "Continue" }}
                </button>
                <p class="auth-card__footer">
                    "Already have an account? " <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
