//! HTTP transport for JSON-RPC calls against the Wobble endpoint.
//!
//! One POST per call, no batching. Request ids come from a per-transport
//! counter so log lines can be matched with server-side traces.
//!
//! # Thread Safety
//!
//! `RpcTransport` is `Send + Sync`; the id counter is atomic and
//! `reqwest::Client` is internally reference counted, so a single transport
//! can be shared behind an `Arc` by the client and every live subscription.

use super::protocol::{Params, RpcRequest, RpcResponse};
use crate::config::ClientConfig;
use crate::session::Session;
use crate::{Result, WobbleError};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// JSON-RPC over HTTP POST.
#[derive(Debug)]
pub struct RpcTransport {
    http: Client,
    endpoint: Url,
    next_id: AtomicU64,
    request_timeout: Duration,
}

impl RpcTransport {
    /// Create a transport from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WobbleError::Config {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            next_id: AtomicU64::new(1),
            request_timeout: config.request_timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Call `method` with the default request timeout.
    pub async fn call(&self, method: &str, params: Params, session: &Session) -> Result<Value> {
        self.call_with_timeout(method, params, session, self.request_timeout)
            .await
    }

    /// Call `method` and decode the result into `T`.
    pub async fn call_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
        session: &Session,
    ) -> Result<T> {
        let value = self.call(method, params, session).await?;
        decode(value)
    }

    /// Call `method`, bounding the whole exchange by `timeout`.
    ///
    /// The session's api key, if any, is added as the `apikey` parameter.
    pub async fn call_with_timeout(
        &self,
        method: &str,
        mut params: Params,
        session: &Session,
        timeout: Duration,
    ) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!("#{:04} - Calling {}", id, method);

        session.apply(&mut params);
        let request = RpcRequest::new(method, params, id);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("#{:04} - {} returned HTTP {}", id, method, status);
            return Err(WobbleError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let envelope: RpcResponse =
            serde_json::from_slice(&body).map_err(|e| WobbleError::Protocol {
                message: format!("Response is not a JSON-RPC envelope: {}", e),
            })?;

        if let Some(response_id) = &envelope.id {
            if *response_id != Value::from(id) {
                warn!(
                    "#{:04} - {} answered with mismatched id {}",
                    id, method, response_id
                );
            }
        }

        envelope.into_result()
    }
}

/// Decode a result value into its typed form.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(WobbleError::from)
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> WobbleError {
    if err.is_timeout() {
        WobbleError::Timeout(timeout)
    } else {
        WobbleError::Transport {
            message: err.to_string(),
        }
    }
}
