//! Two-page registration flow: account credentials, then profile.
//!
//! DESIGN
//! ======
//! The account created on `/register` is handed to `/register/profile`
//! through a [`HandoffSlot`]: an in-memory, single-consumer cell provided
//! as context by the app root. The profile page takes the value on mount,
//! which empties the slot, so a reload, a direct visit, or a back/forward
//! revisit all find nothing and are sent back to the first page. The
//! handoff is never written to storage; a reload mid-flow restarts it.
//!
//! [`RegistrationStage`] is the state machine both pages drive. Submitting
//! while already submitting is an invalid transition, which is what keeps a
//! double click from sending a second request.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::*;
use time::Date;

use crate::net::api::{AccountApi, ApiError};
use crate::net::types::{AccountRecord, CreateProfileRequest};
use crate::util::validation::{
    CredentialField, CredentialsInput, FieldErrors, ProfileField, ProfileInput, format_iso_date, validate_credentials,
    validate_profile,
};

// =============================================================================
// STAGES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationStage {
    #[default]
    CredentialsForm,
    SubmittingCredentials,
    HandoffPending,
    ProfileForm,
    SubmittingProfile,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationEvent {
    SubmitCredentials,
    CredentialsAccepted,
    CredentialsRejected,
    ProfileOpened,
    SubmitProfile,
    ProfileAccepted,
    ProfileRejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid registration transition: {event:?} while {stage:?}")]
pub struct InvalidTransition {
    pub stage: RegistrationStage,
    pub event: RegistrationEvent,
}

impl RegistrationStage {
    /// Next stage for `event`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] for any pair outside the flow.
    pub fn apply(self, event: RegistrationEvent) -> Result<Self, InvalidTransition> {
        use RegistrationEvent as E;
        use RegistrationStage as S;

        match (self, event) {
            (S::CredentialsForm, E::SubmitCredentials) => Ok(S::SubmittingCredentials),
            (S::SubmittingCredentials, E::CredentialsAccepted) => Ok(S::HandoffPending),
            (S::SubmittingCredentials, E::CredentialsRejected) => Ok(S::CredentialsForm),
            (S::HandoffPending, E::ProfileOpened) => Ok(S::ProfileForm),
            (S::ProfileForm, E::SubmitProfile) => Ok(S::SubmittingProfile),
            (S::SubmittingProfile, E::ProfileAccepted) => Ok(S::Complete),
            (S::SubmittingProfile, E::ProfileRejected) => Ok(S::ProfileForm),
            (stage, event) => Err(InvalidTransition { stage, event }),
        }
    }

    /// A request for this page is in flight; its submit button stays disabled.
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::SubmittingCredentials | Self::SubmittingProfile)
    }
}

// =============================================================================
// HANDOFF
// =============================================================================

/// Account created by the first page, carried to the second.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationHandoff {
    pub account: AccountRecord,
    /// Set only by the credentials page's success path.
    pub via_flow: bool,
}

impl RegistrationHandoff {
    pub fn from_flow(account: AccountRecord) -> Self {
        Self { account, via_flow: true }
    }
}

/// Single-consumer holder for the pending handoff. Clones share one cell.
#[derive(Clone, Debug, Default)]
pub struct HandoffSlot {
    inner: Arc<Mutex<Option<RegistrationHandoff>>>,
}

impl HandoffSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<RegistrationHandoff>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a handoff, replacing any unconsumed one.
    pub fn put(&self, handoff: RegistrationHandoff) {
        if self.lock().replace(handoff).is_some() {
            log::debug!("replaced an unconsumed registration handoff");
        }
    }

    /// Remove and return the handoff. Later calls get `None`.
    pub fn take(&self) -> Option<RegistrationHandoff> {
        self.lock().take()
    }
}

/// Registration state shared by both pages: the stage signal and the handoff slot.
#[derive(Clone, Debug)]
pub struct RegistrationFlow {
    pub stage: RwSignal<RegistrationStage>,
    pub slot: HandoffSlot,
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self { stage: RwSignal::new(RegistrationStage::default()), slot: HandoffSlot::new() }
    }
}

impl RegistrationFlow {
    /// Apply `event` to the stage. Returns `false` and leaves the stage alone
    /// when the transition is not allowed.
    pub fn advance(&self, event: RegistrationEvent) -> bool {
        let current = self.stage.get_untracked();
        match current.apply(event) {
            Ok(next) => {
                self.stage.set(next);
                true
            }
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    /// Back to an empty account form, dropping any unconsumed handoff.
    ///
    /// Runs when the account page mounts and when the profile page unmounts.
    pub fn reset(&self) {
        self.stage.set(abandon_flow(self.stage.get_untracked(), &self.slot));
    }
}

/// Stage a fresh visit starts at. Clears `slot` so a stale handoff cannot be
/// admitted later.
pub fn abandon_flow(stage: RegistrationStage, slot: &HandoffSlot) -> RegistrationStage {
    if stage.is_submitting() {
        log::debug!("registration left with a request in flight ({stage:?})");
    }
    if slot.take().is_some() {
        log::debug!("dropped an unconsumed registration handoff");
    }
    RegistrationStage::CredentialsForm
}

/// The profile page was reached without a fresh handoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("registration handoff missing; restart at the account step")]
pub struct MissingHandoff;

pub const MISSING_HANDOFF_NOTICE: &str = "Please create your account first.";

/// Consume the slot for the profile page.
///
/// # Errors
///
/// Returns [`MissingHandoff`] if the slot is empty or the value did not come
/// from the credentials page.
pub fn admit_profile_step(slot: &HandoffSlot) -> Result<RegistrationHandoff, MissingHandoff> {
    match slot.take() {
        Some(handoff) if handoff.via_flow => Ok(handoff),
        Some(_) => {
            log::warn!("discarding registration handoff not created by the account step");
            Err(MissingHandoff)
        }
        None => Err(MissingHandoff),
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Why a submission did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError<F: Ord + Copy + std::fmt::Debug> {
    /// Local validation failed; no request was sent.
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors<F>),

    /// The request was sent and failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validate and send the account form.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without a network call, or [`SubmitError::Api`].
pub async fn submit_credentials<A: AccountApi + ?Sized>(
    api: &A,
    input: &CredentialsInput,
) -> Result<RegistrationHandoff, SubmitError<CredentialField>> {
    let request = validate_credentials(input).map_err(SubmitError::Invalid)?;
    let account = api.register_account(&request).await?;
    log::info!("account {} created; continuing to profile", account.id);
    Ok(RegistrationHandoff::from_flow(account))
}

/// Build the profile body for `handoff`. The account id is passed through untouched.
///
/// # Errors
///
/// Returns the failing profile fields.
pub fn profile_request(
    handoff: &RegistrationHandoff,
    input: &ProfileInput,
    today: Date,
) -> Result<CreateProfileRequest, FieldErrors<ProfileField>> {
    let draft = validate_profile(input, today)?;
    let Some(birthday) = format_iso_date(draft.birthday) else {
        let mut errors = FieldErrors::new();
        errors.insert(ProfileField::Birthday, "Enter a valid birth date.");
        return Err(errors);
    };
    Ok(CreateProfileRequest {
        account_id: handoff.account.id.clone(),
        full_name: draft.full_name,
        gender: draft.gender,
        birthday,
    })
}

/// Validate and send the profile form for the handed-off account.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without a network call, or [`SubmitError::Api`].
pub async fn submit_profile<A: AccountApi + ?Sized>(
    api: &A,
    handoff: &RegistrationHandoff,
    input: &ProfileInput,
    today: Date,
) -> Result<(), SubmitError<ProfileField>> {
    let request = profile_request(handoff, input, today).map_err(SubmitError::Invalid)?;
    api.create_profile(&request).await?;
    log::info!("profile created for account {}", request.account_id);
    Ok(())
}
