//! Persisted credential storage behind a small key-value seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes `authToken` and `user` into browser `localStorage`; the
//! entry redirector and session restore read them back; logout clears
//! them. `BrowserStorage` does the web-sys glue and is a no-op outside the
//! browser build.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort. A missing `localStorage`, a quota error,
//! or a malformed blob all read as "nothing stored" rather than failing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::SessionUser;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Reads return `None` outside a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Parse JSON, mapping any failure to `None`.
pub fn parse_or_none<T: DeserializeOwned>(raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed stored JSON: {e}");
            None
        }
    }
}

/// Raw persisted credentials, exactly as stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistedCredentials {
    pub token: Option<String>,
    pub user_blob: Option<String>,
}

impl PersistedCredentials {
    /// Both keys present and non-empty.
    pub fn is_complete(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.user_blob.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// The stored user, if the blob is present and parses.
    pub fn user(&self) -> Option<SessionUser> {
        self.user_blob.as_deref().and_then(parse_or_none::<SessionUser>)
    }
}

pub fn read_credentials(store: &impl KeyValueStore) -> PersistedCredentials {
    PersistedCredentials { token: store.get(AUTH_TOKEN_KEY), user_blob: store.get(USER_KEY) }
}

/// Write the token and JSON user mirror after a successful login.
pub fn write_credentials(store: &impl KeyValueStore, token: &str, user: &SessionUser) {
    store.set(AUTH_TOKEN_KEY, token);
    save_json(store, USER_KEY, user);
}

pub fn clear_credentials(store: &impl KeyValueStore) {
    store.remove(AUTH_TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Save a JSON value for `key`; serialization failures are logged and skipped.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => log::warn!("could not serialize value for {key}: {e}"),
    }
}
