//! Centralized configuration for the Wobble client.
//!
//! Constants live in [`NetworkConfig`]; per-client settings live in
//! [`ClientConfig`], which starts from those constants.

use crate::Result;
use std::time::Duration;
use url::Url;

/// Network-related defaults.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    /// How long the server may hold a `get_notifications` call open.
    pub const POLL_TIMEOUT: Duration = Duration::from_secs(60);
    /// Slack added on top of the poll timeout before the client gives up.
    pub const POLL_TIMEOUT_GRACE: Duration = Duration::from_secs(5);
    pub const USER_AGENT: &'static str = "Wobble-Client/0.1";
    pub const JSONRPC_VERSION: &'static str = "2.0";
}

/// Settings for one [`WobbleClient`](crate::WobbleClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// JSON-RPC endpoint, e.g. `https://wobble.example.com/api/endpoint.php`.
    pub endpoint: Url,
    /// Timeout for ordinary calls.
    pub request_timeout: Duration,
    /// Upper bound the server is expected to hold a long-poll open.
    pub poll_timeout: Duration,
    /// Slack on top of `poll_timeout` before a poll is abandoned.
    pub poll_grace: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for `endpoint` with default timeouts.
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            request_timeout: NetworkConfig::REQUEST_TIMEOUT,
            poll_timeout: NetworkConfig::POLL_TIMEOUT,
            poll_grace: NetworkConfig::POLL_TIMEOUT_GRACE,
            user_agent: NetworkConfig::USER_AGENT.to_string(),
        })
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    pub fn with_poll_grace(mut self, grace: Duration) -> Self {
        self.poll_grace = grace;
        self
    }

    /// Total time a single poll request may take before it is abandoned.
    ///
    /// This bound is what guarantees a stopped subscription eventually exits.
    pub fn poll_request_timeout(&self) -> Duration {
        self.poll_timeout + self.poll_grace
    }
}
