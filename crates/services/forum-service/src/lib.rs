//! Forum Service Library
//!
//! Data access for a small discussion forum: user accounts, topics, votes
//! and comments over a relational store, plus the `forum` command line.
//!
//! # Layers
//!
//! - **repository**: SeaORM entities and `*Store` implementations behind
//!   narrow traits
//! - **service**: the components callers use (`UserAccount`, `TopicCatalog`,
//!   `VoteLedger`, `CommentThread`)
//! - **infra**: connection pool and schema bootstrap
//! - **cli** / **commands**: command-line surface

pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use crate::config::ForumServiceConfig;
use crate::infra::Database;
use crate::service::Services;

pub use service::{CommentThread, TopicCatalog, UserAccount, VoteLedger};

/// Connect to the configured store, create missing tables and wire up the components.
pub async fn connect(config: &ForumServiceConfig) -> Result<Services, sea_orm::DbErr> {
    let db = Database::connect(&config.database).await?;
    db.ping().await?;

    Ok(Services::from_connection(db.get_connection()))
}
