//! Repository trait for login credentials.

use crate::domain::entities::UserCredential;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// The HTTP service only reads credentials; `create` and `list` exist for
/// the `admin` CLI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, AppError>;

    /// Creates a user with an already hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    async fn create(&self, email: &str, password_hash: &str) -> Result<UserCredential, AppError>;

    /// Lists all users, newest first.
    async fn list(&self) -> Result<Vec<UserCredential>, AppError>;
}
