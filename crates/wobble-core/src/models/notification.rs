//! Notification types delivered by `get_notifications`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a notification is about.
///
/// Unknown tags are kept verbatim in [`NotificationKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    NewPost,
    NewTopic,
    UserJoined,
    Other(String),
}

impl NotificationKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NewPost => "new-post",
            Self::NewTopic => "new-topic",
            Self::UserJoined => "user-joined",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for NotificationKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "new-post" => Self::NewPost,
            "new-topic" => Self::NewTopic,
            "user-joined" => Self::UserJoined,
            _ => Self::Other(tag),
        }
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single server-side event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// The user who caused the event.
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub topic_id: String,
    #[serde(default)]
    pub post_id: String,
}

/// Position in the server's notification log.
///
/// Only the server produces cursor values; the client stores and echoes them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(f64);

impl Cursor {
    /// No notification delivered yet: the server starts from its current tail.
    pub const UNSET: Cursor = Cursor(-1.0);

    pub fn new(timestamp: f64) -> Self {
        Self(timestamp)
    }

    pub fn timestamp(&self) -> f64 {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0 < 0.0
    }

    /// Value to send as `next_timestamp`, if any.
    ///
    /// Non-positive cursors are omitted from the request.
    pub fn as_param(&self) -> Option<f64> {
        (self.0 > 0.0).then_some(self.0)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Result of one `get_notifications` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationBatch {
    /// Delivery order.
    #[serde(default, alias = "messags")]
    pub messages: Vec<Notification>,
    #[serde(default)]
    pub next_timestamp: Cursor,
}
