//! Vote repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::entities::vote::{self, ActiveModel, Entity as VoteEntity};
use common::{AppError, AppResult};
use domain::{TopicId, UserId, Vote, VoteType};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Vote repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Insert a vote. A second vote for the same `(user_id, topic_id)` is
    /// rejected by the primary key and yields `AppError::Conflict`.
    async fn create(&self, user_id: UserId, topic_id: TopicId, vote_type: VoteType)
        -> AppResult<()>;

    /// Check whether `user_id` has voted on `topic_id`
    async fn exists(&self, topic_id: TopicId, user_id: UserId) -> AppResult<bool>;

    /// List votes cast by one user, oldest first. Rows holding an unknown
    /// vote type are skipped.
    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Vote>>;
}

/// Concrete implementation of VoteRepository
pub struct VoteStore {
    db: DatabaseConnection,
}

impl VoteStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VoteRepository for VoteStore {
    async fn create(
        &self,
        user_id: UserId,
        topic_id: TopicId,
        vote_type: VoteType,
    ) -> AppResult<()> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            topic_id: Set(topic_id),
            vote_type: Set(vote_type.to_string()),
            voted_at: Set(chrono::Utc::now()),
        };

        VoteEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| AppError::from_db_write(e, "Vote"))?;

        Ok(())
    }

    async fn exists(&self, topic_id: TopicId, user_id: UserId) -> AppResult<bool> {
        let result = VoteEntity::find_by_id((user_id, topic_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Vote>> {
        let models = VoteEntity::find()
            .filter(vote::Column::UserId.eq(user_id))
            .order_by_asc(vote::Column::VotedAt)
            .order_by_asc(vote::Column::TopicId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let votes = models
            .into_iter()
            .filter_map(|model| {
                let topic_id = model.topic_id;
                match Vote::try_from(model) {
                    Ok(vote) => Some(vote),
                    Err(e) => {
                        tracing::warn!(user_id, topic_id, error = %e, "Skipping unreadable vote row");
                        None
                    }
                }
            })
            .collect();

        Ok(votes)
    }
}
