//! Comment repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use common::{AppError, AppResult};
use domain::{Comment, TopicId, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment on a topic
    async fn create(&self, user_id: UserId, topic_id: TopicId, comment: String) -> AppResult<()>;

    /// List comments on a topic in insertion order
    async fn list_by_topic(&self, topic_id: TopicId) -> AppResult<Vec<Comment>>;
}

/// Concrete implementation of CommentRepository
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn create(&self, user_id: UserId, topic_id: TopicId, comment: String) -> AppResult<()> {
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            topic_id: Set(topic_id),
            comment: Set(comment),
            commented_at: Set(chrono::Utc::now()),
        };

        CommentEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_db_write(e, "Comment"))?;

        Ok(())
    }

    async fn list_by_topic(&self, topic_id: TopicId) -> AppResult<Vec<Comment>> {
        let models = CommentEntity::find()
            .filter(comment::Column::TopicId.eq(topic_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }
}
