//! Topic and post types.

use super::{flag, whole_number, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A topic as listed by `topics_list` and `topics_search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultTopic {
    pub id: String,
    /// First two lines of the root post.
    #[serde(default, rename = "abstract")]
    pub summary: String,
    #[serde(default)]
    pub post_count_unread: i64,
    #[serde(default)]
    pub post_count_total: i64,
    #[serde(default, with = "flag")]
    pub archived: bool,
}

/// Result of `topics_list` and `topics_search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTopicResponse {
    #[serde(default)]
    pub inbox_unread_topics: i64,
    #[serde(default)]
    pub topics: Vec<SearchResultTopic>,
}

/// Full topic returned by `topic_get_details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    #[serde(default)]
    pub messages: Vec<TopicMessage>,
    /// Users currently allowed to see this topic.
    #[serde(default)]
    pub readers: Vec<User>,
    /// Users with posts in this topic; may include former readers.
    #[serde(default)]
    pub writers: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default, with = "flag")]
    pub archived: bool,
    #[serde(default)]
    pub created_at: f64,
}

/// A system message attached to a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicMessage {
    pub message_id: String,
    #[serde(default)]
    pub message: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "parent")]
    pub parent_post_id: Option<String>,
    /// Unix timestamp of the last change.
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default)]
    pub created_at: f64,
    #[serde(default, with = "whole_number")]
    pub revision_no: i64,
    #[serde(default, with = "flag")]
    pub deleted: bool,
    #[serde(default, with = "flag")]
    pub unread: bool,
    #[serde(default, with = "flag")]
    pub intended_post: bool,
    #[serde(default, rename = "locked")]
    pub lock: Option<PostLock>,
    /// Ids of the users who edited this post.
    #[serde(default)]
    pub users: Vec<i64>,
}

/// Holder of a post's edit lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostLock {
    pub user_id: i64,
}

/// Result of `post_edit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditPostResponse {
    #[serde(with = "whole_number")]
    pub revision_no: i64,
}
