//! Topic creation and listing.

use std::sync::Arc;

use domain::{TopicSummary, UserId};

use super::{or_empty, succeeded};
use crate::repository::TopicRepository;

/// Creates and lists discussion topics.
pub struct TopicCatalog {
    repo: Arc<dyn TopicRepository>,
}

impl TopicCatalog {
    pub fn new(repo: Arc<dyn TopicRepository>) -> Self {
        Self { repo }
    }

    /// Create a topic owned by `user_id`. Title and description are stored as given.
    pub async fn create_topic(&self, user_id: UserId, title: &str, description: &str) -> bool {
        let result = self
            .repo
            .create(user_id, title.to_string(), description.to_string())
            .await
            .inspect(|topic_id| tracing::info!(user_id, topic_id, "Topic created"));

        succeeded("create_topic", result)
    }

    /// Every topic, oldest first.
    pub async fn list_all_topics(&self) -> Vec<TopicSummary> {
        let result = self.repo.list().await;
        or_empty("list_all_topics", result)
            .into_iter()
            .map(TopicSummary::from)
            .collect()
    }

    /// Topics created by `user_id`, oldest first.
    pub async fn list_topics_by_user(&self, user_id: UserId) -> Vec<TopicSummary> {
        let result = self.repo.list_by_user(user_id).await;
        or_empty("list_topics_by_user", result)
            .into_iter()
            .map(TopicSummary::from)
            .collect()
    }
}
