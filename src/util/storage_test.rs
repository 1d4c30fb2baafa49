use super::*;
use crate::test_helpers::MemoryStorage;

fn shop_user() -> SessionUser {
    SessionUser { id: "s-1".into(), role: "Shop".to_owned(), username: Some("groomers".to_owned()) }
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("k", "v");
    assert_eq!(b.get("k").as_deref(), Some("v"));
    b.remove("k");
    assert!(a.is_empty());
}

#[test]
fn parse_or_none_returns_none_for_garbage() {
    assert_eq!(parse_or_none::<SessionUser>("{not json"), None);
    assert_eq!(parse_or_none::<SessionUser>(""), None);
    assert_eq!(parse_or_none::<SessionUser>(r#"{"id":"u1"}"#), None);
}

#[test]
fn parse_or_none_parses_valid_user() {
    let user = parse_or_none::<SessionUser>(r#"{"id":"u1","role":"user"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, "user");
}

#[test]
fn write_then_read_credentials() {
    let store = MemoryStorage::new();
    write_credentials(&store, "tok-1", &shop_user());
    let creds = read_credentials(&store);
    assert!(creds.is_complete());
    assert_eq!(creds.token.as_deref(), Some("tok-1"));
    assert_eq!(creds.user(), Some(shop_user()));
}

#[test]
fn clear_credentials_removes_both_keys() {
    let store = MemoryStorage::new();
    write_credentials(&store, "tok-1", &shop_user());
    store.set("unrelated", "x");
    clear_credentials(&store);
    assert_eq!(read_credentials(&store), PersistedCredentials::default());
    assert_eq!(store.len(), 1);
}

#[test]
fn empty_token_is_not_complete() {
    let creds = PersistedCredentials { token: Some(String::new()), user_blob: Some("{}".to_owned()) };
    assert!(!creds.is_complete());
}

#[test]
fn malformed_user_blob_reads_as_no_user() {
    let creds = PersistedCredentials { token: Some("t".to_owned()), user_blob: Some("[1,2".to_owned()) };
    assert!(creds.is_complete());
    assert_eq!(creds.user(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_outside_browser() {
    let store = BrowserStorage;
    store.set(AUTH_TOKEN_KEY, "t");
    assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    store.remove(AUTH_TOKEN_KEY);
}
