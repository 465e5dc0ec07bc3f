//! Service container wiring every component to one connection pool.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{CommentThread, TopicCatalog, UserAccount, VoteLedger};
use crate::repository::{CommentStore, TopicStore, UserStore, VoteStore};

/// All forum components. The components share the pool but never call each other.
pub struct Services {
    pub users: UserAccount,
    pub topics: TopicCatalog,
    pub votes: VoteLedger,
    pub comments: CommentThread,
}

impl Services {
    /// Create the components over SeaORM-backed stores
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            users: UserAccount::new(Arc::new(UserStore::new(db.clone()))),
            topics: TopicCatalog::new(Arc::new(TopicStore::new(db.clone()))),
            votes: VoteLedger::new(Arc::new(VoteStore::new(db.clone()))),
            comments: CommentThread::new(Arc::new(CommentStore::new(db))),
        }
    }
}
