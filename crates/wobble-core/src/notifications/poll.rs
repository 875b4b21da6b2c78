//! Single-shot notification polling.

use crate::models::{Cursor, NotificationBatch};
use crate::rpc::transport::decode;
use crate::rpc::{Params, RpcTransport};
use crate::session::Session;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// RPC method that returns notifications newer than a cursor.
pub const GET_NOTIFICATIONS: &str = "get_notifications";

/// Something that can be asked for the notifications after a cursor.
///
/// One call may wait a long time (the server holds the request open until it
/// has something to report or its own timeout elapses). Implementations do
/// not retry.
#[async_trait]
pub trait PollSource: Send + Sync + 'static {
    async fn poll(&self, cursor: Cursor) -> Result<NotificationBatch>;
}

/// Parameters for a `get_notifications` call.
pub(crate) fn notification_params(cursor: Cursor) -> Params {
    let mut params = Params::new();
    if let Some(timestamp) = cursor.as_param() {
        params.insert("next_timestamp".to_string(), Value::from(timestamp));
    }
    params
}

/// [`PollSource`] backed by the JSON-RPC endpoint.
///
/// Holds the session it was created with; later login/logout on the client
/// does not affect it.
#[derive(Debug, Clone)]
pub struct RpcPollSource {
    transport: Arc<RpcTransport>,
    session: Session,
    timeout: Duration,
}

impl RpcPollSource {
    /// `timeout` bounds each individual poll request.
    pub fn new(transport: Arc<RpcTransport>, session: Session, timeout: Duration) -> Self {
        Self {
            transport,
            session,
            timeout,
        }
    }
}

#[async_trait]
impl PollSource for RpcPollSource {
    async fn poll(&self, cursor: Cursor) -> Result<NotificationBatch> {
        let value = self
            .transport
            .call_with_timeout(
                GET_NOTIFICATIONS,
                notification_params(cursor),
                &self.session,
                self.timeout,
            )
            .await?;
        decode(value)
    }
}
