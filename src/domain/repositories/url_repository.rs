//! Repository trait for alias to URL mappings.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored URLs.
///
/// Every call goes straight to the backing store; there is no caching layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns its id.
    ///
    /// Alias uniqueness is decided by the insert itself. Implementations must
    /// not look the alias up first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] on any other storage error.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, AppError>;

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that alias.
    async fn get_url(&self, alias: &str) -> Result<String, AppError>;

    /// Returns the full record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that alias.
    async fn get_record(&self, alias: &str) -> Result<UrlRecord, AppError>;

    /// Removes the record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing was deleted.
    async fn delete(&self, alias: &str) -> Result<(), AppError>;

    /// Round-trips to the store. Used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
