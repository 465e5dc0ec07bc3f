//! User registration and authentication.

use std::sync::Arc;

use validator::Validate;

use common::{AppError, AppResult};
use domain::{DomainError, NewUser, Password, User, UserId};

use super::succeeded;
use crate::repository::UserRepository;

/// Registers and authenticates users.
pub struct UserAccount {
    repo: Arc<dyn UserRepository>,
}

impl UserAccount {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Register a new user.
    ///
    /// Returns `false` without touching storage when the username is empty,
    /// the email is malformed or the password is under 9 characters, and
    /// `false` when the insert fails, e.g. on a taken username or email.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> bool {
        let new_user = NewUser::new(username, email, password);
        succeeded("register", self.try_register(new_user).await)
    }

    /// Check a username/password pair. Unknown users never authenticate.
    pub async fn authenticate(&self, username: &str, password: &str) -> bool {
        succeeded("authenticate", self.try_authenticate(username, password).await)
    }

    async fn try_register(&self, new_user: NewUser) -> AppResult<UserId> {
        new_user.validate().map_err(DomainError::from)?;

        let password_hash = Password::new(&new_user.password)?.into_string();
        let id = self
            .repo
            .create(new_user.username, new_user.email, password_hash)
            .await?;

        tracing::info!(user_id = id, "User registered");
        Ok(id)
    }

    async fn try_authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Password::from_hash(user.password_hash.as_str()).verify(password) {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|username, email, hash| {
                username == "alice"
                    && email == "alice@example.com"
                    && hash.starts_with("$argon2")
                    && Password::from_hash(hash.as_str()).verify("longenough1")
            })
            .times(1)
            .returning(|_, _, _| Ok(1));

        let accounts = UserAccount::new(Arc::new(repo));
        assert!(accounts.register("alice", "alice@example.com", "longenough1").await);
    }

    #[tokio::test]
    async fn test_register_validation_never_touches_storage() {
        // No expectations: any repository call would panic
        let accounts = UserAccount::new(Arc::new(MockUserRepository::new()));

        assert!(!accounts.register("", "alice@example.com", "longenough1").await);
        assert!(!accounts.register("alice", "not-an-email", "longenough1").await);
        assert!(!accounts.register("alice", "alice@example.com", "short1").await);
        assert!(!accounts.register("alice", "alice@example.com", "12345678").await);
    }

    #[tokio::test]
    async fn test_register_conflict_returns_false() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_, _, _| Err(AppError::conflict("User")));

        let accounts = UserAccount::new(Arc::new(repo));
        assert!(!accounts.register("alice", "alice@example.com", "longenough1").await);
    }

    #[tokio::test]
    async fn test_register_storage_failure_returns_false() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_, _, _| Err(AppError::internal("connection reset")));

        let accounts = UserAccount::new(Arc::new(repo));
        assert!(!accounts.register("alice", "alice@example.com", "longenough1").await);
    }

    #[tokio::test]
    async fn test_authenticate_correct_password() {
        let user = stored_user("longenough1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .withf(|username| username == "alice")
            .returning(move |_| Ok(Some(user.clone())));

        let accounts = UserAccount::new(Arc::new(repo));
        assert!(accounts.authenticate("alice", "longenough1").await);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let user = stored_user("longenough1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let accounts = UserAccount::new(Arc::new(repo));
        assert!(!accounts.authenticate("alice", "wrongpassword").await);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let accounts = UserAccount::new(Arc::new(repo));
        assert!(!accounts.authenticate("nobody", "longenough1").await);
    }

    #[tokio::test]
    async fn test_authenticate_lookup_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Err(AppError::internal("timeout")));

        let accounts = UserAccount::new(Arc::new(repo));
        assert!(!accounts.authenticate("alice", "longenough1").await);
    }
}
