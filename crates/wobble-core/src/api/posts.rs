//! Post editing methods on WobbleClient.

use super::params;
use crate::models::{flag, EditPostResponse};
use crate::{Result, WobbleClient};
use serde::de::IgnoredAny;
use serde_json::Value;

impl WobbleClient {
    /// Create an empty post below `parent_post_id`.
    ///
    /// Returns whether the server created it.
    pub async fn create_post(
        &self,
        topic_id: &str,
        post_id: &str,
        parent_post_id: &str,
        intended_reply: bool,
    ) -> Result<bool> {
        self.call(
            "post_create",
            params([
                ("topic_id", Value::from(topic_id)),
                ("post_id", Value::from(post_id)),
                ("parent_post_id", Value::from(parent_post_id)),
                ("intended_reply", flag::to_param(intended_reply)),
            ]),
        )
        .await
    }

    /// Replace a post's content.
    ///
    /// `revision_no` is the revision the edit is based on; the response
    /// carries the new one.
    pub async fn edit_post(
        &self,
        topic_id: &str,
        post_id: &str,
        content: &str,
        revision_no: i64,
    ) -> Result<EditPostResponse> {
        self.call(
            "post_edit",
            params([
                ("topic_id", Value::from(topic_id)),
                ("post_id", Value::from(post_id)),
                ("content", Value::from(content)),
                ("revision_no", Value::from(revision_no)),
            ]),
        )
        .await
    }

    pub async fn delete_post(&self, topic_id: &str, post_id: &str) -> Result<bool> {
        self.call(
            "post_delete",
            params([
                ("topic_id", Value::from(topic_id)),
                ("post_id", Value::from(post_id)),
            ]),
        )
        .await
    }

    /// Mark a post read or unread.
    pub async fn change_post_read(&self, topic_id: &str, post_id: &str, read: bool) -> Result<()> {
        let _: IgnoredAny = self
            .call(
                "post_change_read",
                params([
                    ("topic_id", Value::from(topic_id)),
                    ("post_id", Value::from(post_id)),
                    ("read", flag::to_param(read)),
                ]),
            )
            .await?;
        Ok(())
    }

    /// Take or release the edit lock on a post.
    pub async fn change_post_lock(&self, topic_id: &str, post_id: &str, lock: bool) -> Result<bool> {
        self.call(
            "post_change_lock",
            params([
                ("topic_id", Value::from(topic_id)),
                ("post_id", Value::from(post_id)),
                ("lock", flag::to_param(lock)),
            ]),
        )
        .await
    }
}
