//! Common utilities shared across forum crates.
//!
//! This crate provides:
//! - Internal error taxonomy for storage and validation failures
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
