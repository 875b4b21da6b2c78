//! Push-style notification stream on top of long polling.
//!
//! A background task polls repeatedly, chaining the cursor from one poll into
//! the next, and hands notifications to the consumer one at a time:
//!
//! ```text
//!   poll(cursor) ──► batch [n1, n2, ...] + next cursor
//!        ▲                   │
//!        │                   ▼ one at a time, waits for the consumer
//!   stop requested? ◄── handoff ──► Subscription::next_notification()
//! ```
//!
//! - Each handoff completes only when the consumer has taken the item, so the
//!   loop never runs ahead of a slow consumer.
//! - A failed poll is fatal: the error is delivered once through the same
//!   queue and the loop exits. No retry.
//! - Stop is checked between batches. Notifications already fetched stay
//!   retrievable after [`Subscription::stop`].

use super::poll::PollSource;
use crate::cancel::StopSignal;
use crate::models::{Cursor, Notification};
use crate::{Result, WobbleError};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What the loop hands to the consumer: a notification or the terminal error.
type Delivery = Result<Notification>;

/// The consumer side has gone away.
struct ConsumerGone;

/// Handle to a running notification stream.
///
/// Dropping the handle aborts the background task.
pub struct Subscription {
    receiver: mpsc::Receiver<Delivery>,
    stop: StopSignal,
    task: JoinHandle<()>,
    terminal: Option<WobbleError>,
}

impl Subscription {
    /// Start streaming from `source`.
    ///
    /// Returns immediately; the first poll runs on a spawned task. Must be
    /// called from within a Tokio runtime.
    pub fn spawn<S: PollSource>(source: S) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        let stop = StopSignal::new();
        let task = tokio::spawn(poll_loop(source, sender, stop.clone()));

        info!("Notification subscription started");

        Self {
            receiver,
            stop,
            task,
            terminal: None,
        }
    }

    /// Wait for the next notification.
    ///
    /// Once a poll has failed, this returns that same error on every call.
    /// After [`stop`](Self::stop) and once the fetched notifications are
    /// drained, it returns [`WobbleError::SubscriptionClosed`].
    ///
    /// Cancel safe: dropping the future loses nothing.
    pub async fn next_notification(&mut self) -> Result<Notification> {
        if let Some(err) = &self.terminal {
            return Err(err.clone());
        }

        match self.receiver.recv().await {
            Some(Ok(notification)) => Ok(notification),
            Some(Err(err)) => {
                self.terminal = Some(err.clone());
                Err(err)
            }
            None => Err(WobbleError::SubscriptionClosed),
        }
    }

    /// Ask the loop to exit before its next poll. Does not block.
    ///
    /// A poll already in flight runs to completion, and its notifications are
    /// still delivered.
    pub fn stop(&self) {
        debug!("Notification subscription stop requested");
        self.stop.stop();
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Whether the background loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// The terminal error, if a poll has failed and it has been retrieved.
    pub fn terminal_error(&self) -> Option<&WobbleError> {
        self.terminal.as_ref()
    }

    /// Cancel the background task immediately, even mid-poll.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Stop the loop, discard undelivered notifications and wait for the
    /// task to exit.
    ///
    /// Waits at most for the poll currently in flight.
    pub async fn shutdown(mut self) {
        self.stop.stop();
        self.receiver.close();
        if let Err(e) = (&mut self.task).await {
            if !e.is_cancelled() {
                warn!("Notification poll loop panicked: {}", e);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Yields notifications, then the terminal error once, then ends.
impl Stream for Subscription {
    type Item = Result<Notification>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.terminal.is_some() {
            return Poll::Ready(None);
        }

        match self.receiver.poll_recv(cx) {
            Poll::Ready(Some(Err(err))) => {
                self.terminal = Some(err.clone());
                Poll::Ready(Some(Err(err)))
            }
            other => other,
        }
    }
}

async fn poll_loop<S: PollSource>(source: S, sender: mpsc::Sender<Delivery>, stop: StopSignal) {
    let mut cursor = Cursor::UNSET;

    loop {
        if stop.is_stopped() {
            info!("Notification poll loop stopped");
            return;
        }

        let batch = match source.poll(cursor).await {
            Ok(batch) => batch,
            Err(err) => {
                warn!("Notification poll failed, closing subscription: {}", err);
                // The slot is free: the previous item was already taken.
                let _ = sender.send(Err(err)).await;
                return;
            }
        };

        cursor = batch.next_timestamp;
        debug!(
            count = batch.messages.len(),
            next_timestamp = cursor.timestamp(),
            "Notification batch received"
        );

        for notification in batch.messages {
            if hand_off(&sender, Ok(notification)).await.is_err() {
                debug!("Notification consumer gone, exiting poll loop");
                return;
            }
        }
    }
}

/// Deliver one item and wait until the consumer has taken it.
async fn hand_off(
    sender: &mpsc::Sender<Delivery>,
    delivery: Delivery,
) -> std::result::Result<(), ConsumerGone> {
    sender.send(delivery).await.map_err(|_| ConsumerGone)?;
    // Capacity is one, so a permit is only available once the item is gone.
    sender.reserve().await.map(drop).map_err(|_| ConsumerGone)
}
