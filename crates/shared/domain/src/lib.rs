//! Domain layer - Core forum entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod comment;
pub mod constants;
pub mod error;
pub mod password;
pub mod time;
pub mod topic;
pub mod user;
pub mod vote;

pub use comment::{Comment, CommentRecord};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use topic::{Topic, TopicId, TopicSummary};
pub use user::{NewUser, User, UserId};
pub use vote::{Vote, VoteRecord, VoteType};
