//! Internal error taxonomy.
//!
//! Repositories and services return `AppResult<T>` so failure causes stay
//! distinguishable for logging. Component facades never hand these errors to
//! callers: they are logged with [`AppError::log`] and folded into a boolean
//! or an empty result.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Storage
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code for log correlation
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the failure is an expected outcome of caller input rather
    /// than a fault in storage or the service itself.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials
                | AppError::Conflict(_)
                | AppError::Validation(_)
        )
    }

    /// Record the failure of `operation`.
    ///
    /// Expected outcomes go out at debug level, faults at error level.
    pub fn log(&self, operation: &'static str) {
        if self.is_expected() {
            tracing::debug!(operation, code = self.code(), "{}", self);
        } else {
            tracing::error!(operation, code = self.code(), error = ?self, "{}", self);
        }
    }
}

// =============================================================================
// Database Error Conversion
// =============================================================================

#[cfg(feature = "database")]
impl AppError {
    /// Map a write failure, turning unique-constraint violations into
    /// `Conflict(entity)` and keeping everything else as `Database`.
    pub fn from_db_write(err: sea_orm::DbErr, entity: &str) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(entity),
            _ => AppError::Database(err),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Password(msg) => AppError::Validation(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
