//! Repository layer for data access.
//!
//! Each component depends on one narrow repository trait; the `*Store`
//! types implement them over a SeaORM connection.

pub mod entities;
mod comment_repository;
mod topic_repository;
mod user_repository;
mod vote_repository;

pub use comment_repository::{CommentRepository, CommentStore};
pub use topic_repository::{TopicRepository, TopicStore};
pub use user_repository::{UserRepository, UserStore};
pub use vote_repository::{VoteRepository, VoteStore};

#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use topic_repository::MockTopicRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use vote_repository::MockVoteRepository;
