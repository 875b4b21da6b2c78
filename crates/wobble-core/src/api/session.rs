//! Session and current-user methods on WobbleClient.

use super::params;
use crate::models::{User, UserLoginResult};
use crate::rpc::Params;
use crate::session::Session;
use crate::{Result, WobbleClient};
use serde::de::IgnoredAny;
use serde_json::Value;
use tracing::info;

impl WobbleClient {
    // ========================================
    // Session
    // ========================================

    /// Version string of the server API.
    pub async fn api_version(&self) -> Result<String> {
        self.call("wobble.api_version", Params::new()).await
    }

    /// Log in and keep the returned api key for subsequent calls.
    ///
    /// Subscriptions created before this call keep their old credentials.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let result: UserLoginResult = self
            .call(
                "user_login",
                params([
                    ("email", Value::from(email)),
                    ("password", Value::from(password)),
                ]),
            )
            .await?;

        self.session = Session::authenticated(result.apikey);
        info!("Logged in as {}", email);
        Ok(())
    }

    /// End the current session on the server and forget the api key.
    pub async fn logout(&mut self) -> Result<()> {
        let _: IgnoredAny = self.call("user_signout", Params::new()).await?;
        self.session = Session::anonymous();
        info!("Logged out");
        Ok(())
    }

    // ========================================
    // Current user
    // ========================================

    pub async fn current_user(&self) -> Result<User> {
        self.call("user_get", Params::new()).await
    }

    pub async fn current_user_id(&self) -> Result<i64> {
        self.call("user_get_id", Params::new()).await
    }
}
