//! User and login types.

use super::flag;
use crate::session::ApiKey;
use serde::{Deserialize, Serialize};

/// A Wobble user, as returned by `user_get` and `user_get_contacts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, with = "flag")]
    pub online: bool,
    /// Gravatar image hash.
    #[serde(default, rename = "img")]
    pub gravatar_hash: String,
}

/// Result of `user_login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoginResult {
    pub apikey: ApiKey,
}
