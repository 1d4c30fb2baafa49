use super::*;
use crate::test_helpers::{MemoryStorage, MockApi};
use crate::util::storage::{AUTH_TOKEN_KEY, USER_KEY};
use futures::executor::block_on;

#[test]
fn validate_login_input_trims_username_and_requires_both() {
    assert_eq!(
        validate_login_input("  ann  ", "secret1"),
        Ok(LoginRequest { username: "ann".to_owned(), password: "secret1".to_owned() })
    );
    assert_eq!(validate_login_input("   ", "secret1"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("ann", ""), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("ann", " pass ").unwrap();
    assert_eq!(request.password, " pass ");
}

#[test]
fn sign_in_persists_credentials_and_lands_customer_home() {
    let api = MockApi::default();
    let store = MemoryStorage::new();
    let request = validate_login_input("ann", "abc123").unwrap();

    let (session, destination) = block_on(sign_in(&api, &store, &request)).unwrap();

    assert!(session.is_authenticated);
    assert_eq!(destination, Destination::Home);
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("tok-mock"));
    assert!(store.get(USER_KEY).is_some());
    assert_eq!(api.login_calls.borrow().len(), 1);
}

#[test]
fn sign_in_as_shop_lands_dashboard() {
    let api = MockApi::with_login_role("Shop");
    let store = MemoryStorage::new();
    let request = validate_login_input("petshop", "abc123").unwrap();

    let (_, destination) = block_on(sign_in(&api, &store, &request)).unwrap();

    assert_eq!(destination, Destination::ShopDashboard);
}

#[test]
fn rejected_sign_in_stores_nothing() {
    let api = MockApi::rejecting(ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() });
    let store = MemoryStorage::new();
    let request = validate_login_input("ann", "wrong1").unwrap();

    let err = block_on(sign_in(&api, &store, &request)).unwrap_err();

    assert_eq!(err.user_message(), "Invalid credentials");
    assert!(store.is_empty());
}
