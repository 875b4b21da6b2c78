//! Wobble Core - async client for the Wobble collaboration service.
//!
//! The service speaks JSON-RPC 2.0 over HTTP. This crate wraps each remote
//! operation in a typed method on [`WobbleClient`] and turns the long-polling
//! `get_notifications` endpoint into a [`Subscription`]: a background task
//! that hands notifications to the caller one at a time, in server order.
//!
//! # Example
//!
//! ```rust,ignore
//! use wobble_core::WobbleClient;
//!
//! #[tokio::main]
//! async fn main() -> wobble_core::Result<()> {
//!     let mut client = WobbleClient::connect("https://wobble.example.com/api/endpoint.php")?;
//!     client.login("me@example.com", "secret").await?;
//!
//!     let inbox = client.list_inbox_topics().await?;
//!     println!("{} unread topics", inbox.inbox_unread_topics);
//!
//!     let mut notifications = client.subscribe_notifications();
//!     while let Ok(notification) = notifications.next_notification().await {
//!         println!("{} in {}", notification.kind, notification.topic_id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod models;
pub mod notifications;
pub mod rpc;
pub mod session;

mod api;

pub use cancel::StopSignal;
pub use config::{ClientConfig, NetworkConfig};
pub use error::{Result, WobbleError};
pub use models::{
    Cursor, EditPostResponse, ListTopicResponse, Notification, NotificationBatch,
    NotificationKind, Post, PostLock, SearchResultTopic, Topic, TopicMessage, User,
};
pub use notifications::{PollSource, RpcPollSource, Subscription};
pub use rpc::RpcTransport;
pub use session::{ApiKey, Session};

use std::sync::Arc;

/// Client for one Wobble endpoint.
///
/// Calls take `&self` and can run concurrently; login and logout take
/// `&mut self`, so the session never changes under an in-flight call.
#[derive(Debug)]
pub struct WobbleClient {
    config: ClientConfig,
    transport: Arc<RpcTransport>,
    session: Session,
}

impl WobbleClient {
    /// Create an anonymous client from a full configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(RpcTransport::new(&config)?);
        Ok(Self {
            config,
            transport,
            session: Session::anonymous(),
        })
    }

    /// Create an anonymous client for `endpoint` with default settings.
    pub fn connect(endpoint: &str) -> Result<Self> {
        Self::new(ClientConfig::new(endpoint)?)
    }

    /// Resume a previously established session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &Arc<RpcTransport> {
        &self.transport
    }
}
