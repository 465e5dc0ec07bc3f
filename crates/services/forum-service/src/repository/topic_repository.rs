//! Topic repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::entities::topic::{self, ActiveModel, Entity as TopicEntity};
use common::{AppError, AppResult};
use domain::{Topic, TopicId, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Topic repository trait for dependency injection.
///
/// Listings are ordered by topic id, i.e. creation order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Insert a new topic owned by `user_id`
    async fn create(&self, user_id: UserId, title: String, description: String)
        -> AppResult<TopicId>;

    /// List every topic
    async fn list(&self) -> AppResult<Vec<Topic>>;

    /// List topics created by one user
    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Topic>>;
}

/// Concrete implementation of TopicRepository
pub struct TopicStore {
    db: DatabaseConnection,
}

impl TopicStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicStore {
    async fn create(
        &self,
        user_id: UserId,
        title: String,
        description: String,
    ) -> AppResult<TopicId> {
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            title: Set(title),
            description: Set(description),
        };

        let result = TopicEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_db_write(e, "Topic"))?;

        Ok(result.last_insert_id)
    }

    async fn list(&self) -> AppResult<Vec<Topic>> {
        let models = TopicEntity::find()
            .order_by_asc(topic::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Topic::from).collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Topic>> {
        let models = TopicEntity::find()
            .filter(topic::Column::UserId.eq(user_id))
            .order_by_asc(topic::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Topic::from).collect())
    }
}
