//! REST API client for registration, profile creation, and login.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native builds and tests: `HttpAccountApi` returns
//! [`ApiError::Unavailable`]; tests drive the `AccountApi` seam with a mock.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. A rejected request keeps
//! the server's human-readable `message` so pages can surface it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AccountRecord, CreateProfileRequest, LoginRequest, LoginResponse, RegisterAccountRequest};
#[cfg(feature = "csr")]
use super::types::ApiEnvelope;
#[cfg(any(test, feature = "csr"))]
use super::types::ApiErrorBody;
use crate::config::ClientConfig;

pub const REGISTER_ACCOUNT_PATH: &str = "/api/accounts/register";
pub const CREATE_PROFILE_PATH: &str = "/api/profiles";
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Failure of a call to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// No HTTP transport in this build (native).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) => "Could not reach the server. Please try again.".to_owned(),
            Self::Parse(_) | Self::Unavailable => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

/// Backend calls used by the registration and login flows. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait AccountApi {
    /// Create the credential account (registration phase one).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, rejection, or a malformed body.
    async fn register_account(&self, request: &RegisterAccountRequest) -> Result<AccountRecord, ApiError>;

    /// Create the profile record for an existing account (registration phase two).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or rejection.
    async fn create_profile(&self, request: &CreateProfileRequest) -> Result<(), ApiError>;

    /// Exchange credentials for a token and user summary.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, rejection, or a malformed body.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// `AccountApi` over HTTP against the configured API base.
#[derive(Clone, Debug)]
pub struct HttpAccountApi {
    config: ClientConfig,
}

impl HttpAccountApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[cfg(any(test, feature = "csr"))]
fn rejection_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Rejected { status, message }
}

#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    Err(rejection_from_body(status, &text))
}

#[async_trait::async_trait(?Send)]
impl AccountApi for HttpAccountApi {
    async fn register_account(&self, request: &RegisterAccountRequest) -> Result<AccountRecord, ApiError> {
        let url = self.url(REGISTER_ACCOUNT_PATH);
        #[cfg(feature = "csr")]
        {
            log::debug!("POST {url}");
            let resp = post_json(&url, request).await?;
            let body: ApiEnvelope<AccountRecord> = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
            Ok(body.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn create_profile(&self, request: &CreateProfileRequest) -> Result<(), ApiError> {
        let url = self.url(CREATE_PROFILE_PATH);
        #[cfg(feature = "csr")]
        {
            log::debug!("POST {url}");
            post_json(&url, request).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url(LOGIN_PATH);
        #[cfg(feature = "csr")]
        {
            log::debug!("POST {url}");
            let resp = post_json(&url, request).await?;
            let body: ApiEnvelope<LoginResponse> = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
            Ok(body.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request);
            Err(ApiError::Unavailable)
        }
    }
}
