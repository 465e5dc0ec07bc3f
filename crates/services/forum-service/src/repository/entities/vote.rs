//! Vote database entity for SeaORM.
//!
//! The composite primary key `(user_id, topic_id)` is what enforces one vote
//! per user per topic.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Vote};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Votes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub topic_id: i32,
    /// "up" or "down"
    pub vote_type: String,
    pub voted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::topic::Entity",
        from = "Column::TopicId",
        to = "super::topic::Column::Id"
    )]
    Topic,
}

impl ActiveModelBehavior for ActiveModel {}

/// Fails only if the row holds a vote type this crate never writes.
impl TryFrom<Model> for Vote {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Vote {
            user_id: model.user_id,
            topic_id: model.topic_id,
            vote_type: model.vote_type.parse()?,
            voted_at: model.voted_at,
        })
    }
}
