//! Topic domain entity.

use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Generated primary key of a `Topics` row.
pub type TopicId = i32;

/// Topic domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
}

/// Listing record: `{id, title, description}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: TopicId,
    pub title: String,
    pub description: String,
}

impl From<Topic> for TopicSummary {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            description: topic.description,
        }
    }
}
