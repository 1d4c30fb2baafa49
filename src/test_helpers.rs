//! Recording fakes for the API and notifier seams, shared by unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::api::{AccountApi, ApiError};
use crate::net::types::{
    AccountRecord, CreateProfileRequest, LoginRequest, LoginResponse, RegisterAccountRequest, SessionUser,
};
use crate::state::toast::{Notice, Notifier};
use crate::util::storage::KeyValueStore;

pub const MOCK_ACCOUNT_ID: &str = "acc-7f3e";

#[derive(Default)]
pub struct MockApi {
    pub register_calls: RefCell<Vec<RegisterAccountRequest>>,
    pub profile_calls: RefCell<Vec<CreateProfileRequest>>,
    pub login_calls: RefCell<Vec<LoginRequest>>,
    pub reject_with: Option<ApiError>,
    pub login_role: Option<String>,
}

impl MockApi {
    pub fn rejecting(err: ApiError) -> Self {
        Self { reject_with: Some(err), ..Self::default() }
    }

    pub fn with_login_role(role: &str) -> Self {
        Self { login_role: Some(role.to_owned()), ..Self::default() }
    }

    fn outcome(&self) -> Result<(), ApiError> {
        match &self.reject_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AccountApi for MockApi {
    async fn register_account(&self, request: &RegisterAccountRequest) -> Result<AccountRecord, ApiError> {
        self.register_calls.borrow_mut().push(request.clone());
        self.outcome()?;
        let mut extra = serde_json::Map::new();
        extra.insert("email".to_owned(), serde_json::json!(request.email));
        Ok(AccountRecord { id: MOCK_ACCOUNT_ID.into(), username: request.username.clone(), extra })
    }

    async fn create_profile(&self, request: &CreateProfileRequest) -> Result<(), ApiError> {
        self.profile_calls.borrow_mut().push(request.clone());
        self.outcome()
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.login_calls.borrow_mut().push(request.clone());
        self.outcome()?;
        Ok(LoginResponse {
            token: "tok-mock".to_owned(),
            user: SessionUser {
                id: "u-mock".into(),
                role: self.login_role.clone().unwrap_or_else(|| "user".to_owned()),
                username: Some(request.username.clone()),
            },
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
