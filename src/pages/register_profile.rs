//! Profile step of registration (`/register/profile`).
//!
//! Only reachable right after a successful account step: the page takes
//! the pending handoff on mount and, when there is none, notifies and
//! replaces itself with `/register` without rendering the form. The
//! profile request is built from the taken handoff, so it can never be
//! sent without an account id from this session.

#[cfg(test)]
#[path = "register_profile_test.rs"]
mod register_profile_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{LOGIN_PATH, REGISTER_PATH};
use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::net::api::HttpAccountApi;
use crate::state::registration::{
    MISSING_HANDOFF_NOTICE, MissingHandoff, RegistrationEvent, RegistrationFlow, RegistrationHandoff, RegistrationStage,
    SubmitError, admit_profile_step, submit_profile,
};
use crate::state::toast::{Notice, Notifier, ToastNotifier};
use crate::util::auth::{RedirectGuard, replace_options};
use crate::util::validation::{FieldErrors, ProfileField, ProfileInput, today, validate_profile};

pub const GENDER_OPTIONS: [(&str, &str); 3] = [("male", "Male"), ("female", "Female"), ("other", "Other")];
pub const PROFILE_CREATED_NOTICE: &str = "Registration complete! Redirecting to sign in...";

/// Bounce a visitor who arrived without a handoff back to the account step.
pub(crate) fn redirect_missing_handoff<N, F>(reason: &MissingHandoff, notifier: &N, navigate: F)
where
    N: Notifier,
    F: FnOnce(&str, NavigateOptions),
{
    log::info!("{reason}");
    notifier.notify(Notice::error(MISSING_HANDOFF_NOTICE));
    navigate(REGISTER_PATH, replace_options());
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ProfileSettled {
    /// Profile saved; head to login after the configured delay.
    Complete,
    Invalid(FieldErrors<ProfileField>),
    Rejected,
}

impl ProfileSettled {
    pub(crate) fn event(&self) -> RegistrationEvent {
        match self {
            Self::Complete => RegistrationEvent::ProfileAccepted,
            Self::Invalid(_) | Self::Rejected => RegistrationEvent::ProfileRejected,
        }
    }
}

/// Go to login after the confirmation delay, unless the page was left meanwhile.
///
/// Returns whether the navigation happened.
pub(crate) fn finish_registration<F>(mounted: &AtomicBool, navigate: F) -> bool
where
    F: FnOnce(&str, NavigateOptions),
{
    if !mounted.load(Ordering::Relaxed) {
        log::debug!("profile step left during the confirmation delay; staying put");
        return false;
    }
    navigate(LOGIN_PATH, replace_options());
    true
}

pub(crate) fn settle_profile_submit(
    result: Result<(), SubmitError<ProfileField>>,
    notifier: &impl Notifier,
) -> ProfileSettled {
    match result {
        Ok(()) => {
            notifier.notify(Notice::success(PROFILE_CREATED_NOTICE));
            ProfileSettled::Complete
        }
        Err(SubmitError::Invalid(errors)) => ProfileSettled::Invalid(errors),
        Err(SubmitError::Api(err)) => {
            log::warn!("profile creation failed: {err}");
            notifier.notify(Notice::error(err.user_message()));
            ProfileSettled::Rejected
        }
    }
}

#[component]
pub fn RegisterProfilePage() -> impl IntoView {
    let flow = expect_context::<RegistrationFlow>();
    let notifier = expect_context::<ToastNotifier>();
    let navigate = use_navigate();

    let handoff = match admit_profile_step(&flow.slot) {
        Ok(handoff) => handoff,
        Err(reason) => {
            // Navigate from an effect so the router has settled first.
            let guard = RedirectGuard::new();
            Effect::new(move || {
                if guard.try_begin() {
                    redirect_missing_handoff(&reason, &notifier, |path, options| navigate(path, options));
                }
            });
            return ().into_any();
        }
    };

    if !flow.advance(RegistrationEvent::ProfileOpened) {
        flow.stage.set(RegistrationStage::ProfileForm);
    }

    view! { <ProfileForm handoff=handoff flow=flow notifier=notifier/> }.into_any()
}

#[component]
fn ProfileForm(handoff: RegistrationHandoff, flow: RegistrationFlow, notifier: ToastNotifier) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let birthday = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::<ProfileField>::new());
    let stage = flow.stage;

    let mounted = Arc::new(AtomicBool::new(true));
    {
        let mounted = Arc::clone(&mounted);
        let flow = flow.clone();
        on_cleanup(move || {
            mounted.store(false, Ordering::Relaxed);
            flow.reset();
        });
    }

    let handoff = Arc::new(handoff);
    let username = handoff.account.username.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input =
            ProfileInput { full_name: full_name.get_untracked(), gender: gender.get_untracked(), birthday: birthday.get_untracked() };
        let as_of = today();
        if let Err(found) = validate_profile(&input, as_of) {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        if !flow.advance(RegistrationEvent::SubmitProfile) {
            return;
        }

        let flow = flow.clone();
        let navigate = navigate.clone();
        let mounted = Arc::clone(&mounted);
        let handoff = Arc::clone(&handoff);
        let api = HttpAccountApi::new(config.clone());
        let delay_ms = config.login_redirect_delay_ms;
        leptos::task::spawn_local(async move {
            let result = submit_profile(&api, &handoff, &input, as_of).await;
            if !mounted.load(Ordering::Relaxed) {
                log::debug!("profile step left before the request finished; ignoring result");
                return;
            }
            let settled = settle_profile_submit(result, &notifier);
            flow.advance(settled.event());
            match settled {
                ProfileSettled::Complete => {
                    #[cfg(feature = "csr")]
                    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                    #[cfg(not(feature = "csr"))]
                    let _ = delay_ms;
                    finish_registration(&mounted, |path, options| navigate(path, options));
                }
                ProfileSettled::Invalid(found) => errors.set(found),
                ProfileSettled::Rejected => {}
            }
        });
    };

    let field_error = move |field: ProfileField| Signal::derive(move || errors.with(|e| e.get(field)));
    let gender_error = field_error(ProfileField::Gender);
    let locked = move || stage.get().is_submitting() || stage.get() == RegistrationStage::Complete;

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Tell us about you"</h1>
                <p class="auth-card__subtitle">{format!("Step 2 of 2 for {username}")}</p>
                <FormField label="Full name" input_type="text" value=full_name error=field_error(ProfileField::FullName)/>
                <label class="form-field">
                    <span class="form-field__label">"Gender"</span>
                    <select
                        class="form-field__input"
                        prop:value=move || gender.get()
                        on:change=move |ev| gender.set(event_target_value(&ev))
                    >
                        <option value="">"Select..."</option>
                        {GENDER_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <Show when=move || gender_error.get().is_some()>
                        <span class="form-field__error">{move || gender_error.get().unwrap_or_default()}</span>
                    </Show>
                </label>
                <FormField label="Birth date" input_type="date" value=birthday error=field_error(ProfileField::Birthday)/>
                <button class="btn btn--primary" type="submit" disabled=locked>
                    {move || if stage.get().is_submitting() { "Saving..." } else { "Finish" }}
                </button>
            </form>
        </div>
    }
}
