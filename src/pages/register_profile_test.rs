use super::*;
use crate::net::api::ApiError;
use crate::net::types::AccountRecord;
use crate::state::registration::HandoffSlot;
use crate::state::toast::NoticeKind;
use crate::test_helpers::{MOCK_ACCOUNT_ID, MockApi, RecordingNotifier};
use futures::executor::block_on;
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 19);

fn handoff() -> RegistrationHandoff {
    RegistrationHandoff::from_flow(AccountRecord {
        id: MOCK_ACCOUNT_ID.into(),
        username: "abc".to_owned(),
        extra: serde_json::Map::new(),
    })
}

fn input() -> ProfileInput {
    ProfileInput { full_name: "Ann Lee".to_owned(), gender: "female".to_owned(), birthday: "1990-05-01".to_owned() }
}

#[test]
fn missing_handoff_redirects_back_with_replace() {
    let slot = HandoffSlot::new();
    let notifier = RecordingNotifier::default();
    let api = MockApi::default();
    let mut visited = Vec::new();

    let reason = admit_profile_step(&slot).unwrap_err();
    redirect_missing_handoff(&reason, &notifier, |path, options| visited.push((path.to_owned(), options.replace)));

    assert_eq!(visited, vec![(REGISTER_PATH.to_owned(), true)]);
    let notices = notifier.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].message, MISSING_HANDOFF_NOTICE);
    assert!(api.profile_calls.borrow().is_empty());
}

#[test]
fn second_visit_after_admission_is_turned_away() {
    let slot = HandoffSlot::new();
    slot.put(handoff());

    assert!(admit_profile_step(&slot).is_ok());
    assert!(admit_profile_step(&slot).is_err());
}

#[test]
fn profile_success_notifies_and_completes() {
    let api = MockApi::default();
    let notifier = RecordingNotifier::default();

    let result = block_on(submit_profile(&api, &handoff(), &input(), TODAY));
    let settled = settle_profile_submit(result, &notifier);

    assert_eq!(settled, ProfileSettled::Complete);
    assert_eq!(settled.event(), RegistrationEvent::ProfileAccepted);
    let calls = api.profile_calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].account_id, MOCK_ACCOUNT_ID);
    let notices = notifier.notices.borrow();
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert_eq!(notices[0].message, PROFILE_CREATED_NOTICE);
}

#[test]
fn future_birthday_is_caught_before_the_request() {
    let api = MockApi::default();
    let notifier = RecordingNotifier::default();
    let future = ProfileInput { birthday: "2027-01-01".to_owned(), ..input() };

    let result = block_on(submit_profile(&api, &handoff(), &future, TODAY));
    let settled = settle_profile_submit(result, &notifier);

    let ProfileSettled::Invalid(errors) = &settled else {
        panic!("expected field errors, got {settled:?}");
    };
    assert!(errors.get(ProfileField::Birthday).is_some());
    assert!(api.profile_calls.borrow().is_empty());
    assert!(notifier.notices.borrow().is_empty());
}

#[test]
fn rejected_profile_shows_server_message() {
    let api = MockApi::rejecting(ApiError::Rejected { status: 400, message: "Account not found".to_owned() });
    let notifier = RecordingNotifier::default();

    let result = block_on(submit_profile(&api, &handoff(), &input(), TODAY));
    let settled = settle_profile_submit(result, &notifier);

    assert_eq!(settled, ProfileSettled::Rejected);
    assert_eq!(settled.event(), RegistrationEvent::ProfileRejected);
    assert_eq!(notifier.notices.borrow()[0].message, "Account not found");
}

#[test]
fn gender_options_have_distinct_non_empty_values() {
    let values: Vec<&str> = GENDER_OPTIONS.iter().map(|(value, _)| *value).collect();
    assert!(values.iter().all(|v| !v.is_empty()));
    let mut deduped = values.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), values.len());
}

#[test]
fn finished_registration_goes_to_login_while_mounted() {
    let mounted = AtomicBool::new(true);
    let mut visited = Vec::new();

    assert!(finish_registration(&mounted, |path, options| visited.push((path.to_owned(), options.replace))));
    assert_eq!(visited, vec![(LOGIN_PATH.to_owned(), true)]);
}

#[test]
fn leaving_during_confirmation_delay_cancels_login_redirect() {
    let mounted = AtomicBool::new(true);
    mounted.store(false, Ordering::Relaxed);
    let mut visited: Vec<String> = Vec::new();

    assert!(!finish_registration(&mounted, |path, _| visited.push(path.to_owned())));
    assert!(visited.is_empty());
}
