//! Session credentials.
//!
//! A [`Session`] is a plain value: the client owns one and replaces it on
//! login/logout, and each notification subscription keeps the snapshot it was
//! created with.

use crate::rpc::Params;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Parameter name the server reads the api key from.
pub const API_KEY_PARAM: &str = "apikey";

/// Opaque session token returned by `user_login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Credentials attached to every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    api_key: Option<ApiKey>,
}

impl Session {
    /// A session with no credentials.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(api_key: ApiKey) -> Self {
        Self {
            api_key: Some(api_key),
        }
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Add the api key to `params` if the session holds one.
    pub(crate) fn apply(&self, params: &mut Params) {
        if let Some(key) = &self.api_key {
            params.insert(API_KEY_PARAM.to_string(), Value::String(key.0.clone()));
        }
    }
}
