//! Topic listing and creation methods on WobbleClient.

use super::params;
use crate::models::{flag, ListTopicResponse, Topic};
use crate::{Result, WobbleClient};
use serde::de::IgnoredAny;
use serde_json::Value;

impl WobbleClient {
    /// Topics in the inbox, with the number of unread ones.
    pub async fn list_inbox_topics(&self) -> Result<ListTopicResponse> {
        self.list_topics(false).await
    }

    pub async fn list_archived_topics(&self) -> Result<ListTopicResponse> {
        self.list_topics(true).await
    }

    /// All topics matching `filter`.
    pub async fn search_topics(&self, filter: &str) -> Result<ListTopicResponse> {
        self.call("topics_search", params([("filter", Value::from(filter))]))
            .await
    }

    pub async fn get_topic(&self, topic_id: &str) -> Result<Topic> {
        self.call("topic_get_details", params([("id", Value::from(topic_id))]))
            .await
    }

    /// Create a topic with an empty root post (id `1`).
    ///
    /// Topic ids are chosen by the client.
    pub async fn create_topic(&self, topic_id: &str) -> Result<()> {
        let _: IgnoredAny = self
            .call("topics_create", params([("id", Value::from(topic_id))]))
            .await?;
        Ok(())
    }

    /// Give a contact access to a topic.
    ///
    /// The server notifies the topic's other readers.
    pub async fn add_topic_reader(&self, topic_id: &str, contact_id: i64) -> Result<()> {
        let _: IgnoredAny = self
            .call(
                "topic_add_user",
                params([
                    ("topic_id", Value::from(topic_id)),
                    ("contact_id", Value::from(contact_id)),
                ]),
            )
            .await?;
        Ok(())
    }

    async fn list_topics(&self, archived: bool) -> Result<ListTopicResponse> {
        self.call("topics_list", params([("archived", flag::to_param(archived))]))
            .await
    }
}
