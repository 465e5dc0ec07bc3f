//! User domain entity and registration input.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Generated primary key of a `Users` row.
pub type UserId = i32;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Registration input, validated before any storage call.
#[derive(Clone, Deserialize, Validate)]
pub struct NewUser {
    /// Unique, non-empty login name
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plain text password (minimum 9 characters)
    #[validate(length(min = 9, message = "Password must be at least 9 characters"))]
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    fn validate(user: &NewUser) -> Result<(), DomainError> {
        user.validate().map_err(DomainError::from)
    }

    #[test]
    fn test_valid_registration_input() {
        let user = NewUser::new("alice", "alice@example.com", "longenough1");
        assert!(validate(&user).is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        let user = NewUser::new("", "alice@example.com", "longenough1");
        assert_eq!(
            validate(&user),
            Err(DomainError::Validation("Username cannot be empty".to_string()))
        );
    }

    #[test]
    fn test_invalid_email_rejected() {
        let user = NewUser::new("alice", "not-an-email", "longenough1");
        assert_eq!(
            validate(&user),
            Err(DomainError::Validation("Invalid email format".to_string()))
        );
    }

    #[test]
    fn test_short_password_rejected() {
        let user = NewUser::new("alice", "alice@example.com", "short1");
        assert_eq!(
            validate(&user),
            Err(DomainError::Validation(
                "Password must be at least 9 characters".to_string()
            ))
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = NewUser::new("alice", "alice@example.com", "longenough1");
        let debug = format!("{:?}", user);
        assert!(!debug.contains("longenough1"));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"username\":\"alice\""));
    }
}
