//! SeaORM entities. Table and column names match the existing forum schema.

pub mod comment;
pub mod topic;
pub mod user;
pub mod vote;
