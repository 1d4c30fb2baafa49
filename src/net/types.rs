//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Request bodies serialize to the exact field names the backend expects
//! (`confirmPassword` is camelCase, the profile body is snake_case).
//! `AccountRecord` keeps unknown response fields so a handoff carries the
//! whole record forward untouched.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role sent with every self-service registration.
pub const CUSTOMER_ROLE: &str = "user";

/// Role string that marks a shop account.
pub const SHOP_ROLE: &str = "Shop";

/// Server-issued identifier, kept in whatever JSON shape the backend used.
///
/// Numeric ids stay numbers and string ids stay strings, so an id read from
/// one response is written back byte-for-byte in the next request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Text(s) if s == other)
    }
}

/// Body of `POST /api/accounts/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub role: String,
}

/// Account record returned by the registration endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Account identifier; the profile call references it verbatim.
    pub id: RecordId,
    pub username: String,
    /// Any other fields the server returned (email, role, timestamps).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /api/profiles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub account_id: RecordId,
    pub full_name: String,
    pub gender: String,
    /// ISO-8601 calendar date, `YYYY-MM-DD`.
    pub birthday: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// User summary held in the session and mirrored into storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: RecordId,
    pub role: String,
    /// Display name, when the server includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl SessionUser {
    pub fn is_shop(&self) -> bool {
        self.role == SHOP_ROLE
    }
}

/// Success envelope: `{ "data": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Error body carried by non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
