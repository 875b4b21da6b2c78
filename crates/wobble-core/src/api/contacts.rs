//! Contact management methods on WobbleClient.

use super::params;
use crate::models::User;
use crate::rpc::Params;
use crate::{Result, WobbleClient};
use serde_json::Value;

impl WobbleClient {
    /// Add the user registered under `email` to the contact list.
    ///
    /// Returns `false` if the server did not add anyone.
    pub async fn add_contact(&self, email: &str) -> Result<bool> {
        self.call("user_add_contact", params([("contact_email", Value::from(email))]))
            .await
    }

    pub async fn contacts(&self) -> Result<Vec<User>> {
        self.call("user_get_contacts", Params::new()).await
    }
}
