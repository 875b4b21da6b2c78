//! Notification methods on WobbleClient.

use crate::models::{Cursor, NotificationBatch};
use crate::notifications::{PollSource, RpcPollSource, Subscription};
use crate::{Result, WobbleClient};

impl WobbleClient {
    /// One long-poll round trip: notifications after `cursor`, plus the
    /// cursor to use next.
    ///
    /// Most callers want [`subscribe_notifications`](Self::subscribe_notifications).
    pub async fn get_notifications(&self, cursor: Cursor) -> Result<NotificationBatch> {
        self.poll_source().poll(cursor).await
    }

    /// Start a notification stream from the server's current tail.
    ///
    /// The stream uses the session as it is now. Must be called from within
    /// a Tokio runtime.
    pub fn subscribe_notifications(&self) -> Subscription {
        Subscription::spawn(self.poll_source())
    }

    /// The poll source a new subscription would use.
    pub fn poll_source(&self) -> RpcPollSource {
        RpcPollSource::new(
            self.transport.clone(),
            self.session.clone(),
            self.config.poll_request_timeout(),
        )
    }
}
