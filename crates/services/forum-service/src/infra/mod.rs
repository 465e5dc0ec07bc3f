//! Infrastructure layer - database connection and schema.

mod db;
pub mod schema;

pub use db::Database;
