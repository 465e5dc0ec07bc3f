//! Comment domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::topic::TopicId;
use crate::user::UserId;

/// Comment domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub user_id: UserId,
    pub topic_id: TopicId,
    pub comment: String,
    pub commented_at: DateTime<Utc>,
}

/// Listing record: `{user_id, comment, commented_at}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentRecord {
    pub user_id: UserId,
    pub comment: String,
    pub commented_at: DateTime<Utc>,
}

impl From<Comment> for CommentRecord {
    fn from(comment: Comment) -> Self {
        Self {
            user_id: comment.user_id,
            comment: comment.comment,
            commented_at: comment.commented_at,
        }
    }
}
