use super::*;

#[test]
fn rejection_from_body_keeps_server_message() {
    let err = rejection_from_body(409, r#"{"message":"Username already taken"}"#);
    assert_eq!(err, ApiError::Rejected { status: 409, message: "Username already taken".to_owned() });
    assert_eq!(err.user_message(), "Username already taken");
}

#[test]
fn rejection_from_body_falls_back_to_status_for_unparseable_body() {
    let err = rejection_from_body(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Rejected { status: 502, message: "request failed: 502".to_owned() });
}

#[test]
fn rejection_from_body_ignores_blank_message() {
    let err = rejection_from_body(400, r#"{"message":"   "}"#);
    assert_eq!(err, ApiError::Rejected { status: 400, message: "request failed: 400".to_owned() });
}

#[test]
fn user_message_hides_transport_details() {
    let err = ApiError::Network("dns lookup failed".to_owned());
    assert!(!err.user_message().contains("dns"));
    assert_eq!(ApiError::Unavailable.user_message(), ApiError::Parse("x".to_owned()).user_message());
}

#[test]
fn http_api_builds_urls_from_config() {
    let api = HttpAccountApi::new(ClientConfig { api_base: "https://api.pawcare.test".to_owned(), ..ClientConfig::default() });
    assert_eq!(api.url(REGISTER_ACCOUNT_PATH), "https://api.pawcare.test/api/accounts/register");
    assert_eq!(api.url(CREATE_PROFILE_PATH), "https://api.pawcare.test/api/profiles");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpAccountApi::new(ClientConfig::default());
    let req = LoginRequest { username: "abc".to_owned(), password: "abc123".to_owned() };
    assert_eq!(futures::executor::block_on(api.login(&req)), Err(ApiError::Unavailable));
}
