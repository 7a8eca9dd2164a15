//! URL saving, lookup and deletion.

use serde_json::json;
use std::sync::Arc;
use url::Url;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{ALIAS_LENGTH, generate_alias};

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedUrl {
    pub id: i64,
    pub alias: String,
}

/// Service wrapping the URL store.
///
/// Fills in a random alias when the caller gives none and rejects targets that
/// are not absolute `http`/`https` URLs. Alias collisions are left to the
/// store; a generated alias that collides is reported, not retried.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Saves `url` under `alias`, or under a generated alias when `alias` is
    /// `None` or empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not http(s).
    /// Returns [`AppError::Conflict`] if the alias is taken.
    pub async fn save(&self, url: &str, alias: Option<&str>) -> Result<SavedUrl, AppError> {
        validate_target(url)?;

        let alias = match alias.map(str::trim) {
            Some(a) if !a.is_empty() => a.to_string(),
            _ => generate_alias(ALIAS_LENGTH),
        };

        let id = self.repository.save(url, &alias).await?;

        Ok(SavedUrl { id, alias })
    }

    /// Resolves an alias to its target URL.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.repository.get_url(alias).await
    }

    /// Returns the stored record for an alias.
    pub async fn info(&self, alias: &str) -> Result<UrlRecord, AppError> {
        self.repository.get_record(alias).await
    }

    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        self.repository.delete(alias).await
    }

    /// Checks that the backing store answers.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn validate_target(url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::bad_request(
            "field URL is a required field",
            json!({ "field": "url" }),
        ));
    }

    // Url::parse strips tabs and newlines
    if url.chars().any(char::is_control) {
        return Err(invalid_target(url));
    }

    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => Ok(()),
        _ => Err(invalid_target(url)),
    }
}

fn invalid_target(url: &str) -> AppError {
    AppError::bad_request(
        "field URL is not a valid URL",
        json!({ "field": "url", "value": url }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    #[tokio::test]
    async fn test_save_with_given_alias() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save()
            .withf(|url, alias| url == "https://a.com" && alias == "abc123")
            .times(1)
            .returning(|_, _| Ok(1));

        let service = UrlService::new(Arc::new(repo));
        let saved = service.save("https://a.com", Some("abc123")).await.unwrap();

        assert_eq!(saved, SavedUrl { id: 1, alias: "abc123".to_string() });
    }

    #[tokio::test]
    async fn test_save_generates_alias_when_missing() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save()
            .withf(|_, alias| alias.len() == ALIAS_LENGTH)
            .times(2)
            .returning(|_, _| Ok(5));

        let service = UrlService::new(Arc::new(repo));

        let saved = service.save("https://example.com", None).await.unwrap();
        assert_eq!(saved.alias.len(), 6);
        assert!(saved.alias.chars().all(|c| c.is_ascii_alphanumeric()));

        let saved = service.save("https://example.com", Some("")).await.unwrap();
        assert_eq!(saved.alias.len(), 6);
    }

    #[tokio::test]
    async fn test_save_propagates_conflict() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_, _| Err(AppError::conflict("taken", json!({}))));

        let service = UrlService::new(Arc::new(repo));
        let result = service.save("https://b.com", Some("abc123")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_save_rejects_empty_url() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save().times(0);

        let service = UrlService::new(Arc::new(repo));
        let result = service.save("  ", None).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_save_rejects_non_http_scheme() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save().times(0);

        let service = UrlService::new(Arc::new(repo));

        for bad in ["javascript:alert(1)", "ftp://example.com", "not-a-url"] {
            let result = service.save(bad, None).await;
            assert!(matches!(result, Err(AppError::Validation { .. })), "{bad}");
        }
    }

    #[tokio::test]
    async fn test_save_rejects_control_characters() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save().times(0);

        let service = UrlService::new(Arc::new(repo));

        for bad in ["https://a.com/x\ny", "https://a.com/\tpath", "https://a.com/\r"] {
            let result = service.save(bad, Some("ctl")).await;
            assert!(matches!(result, Err(AppError::Validation { .. })), "{bad:?}");
        }
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_url()
            .times(1)
            .returning(|alias| Err(AppError::not_found("Alias not found", json!({ "alias": alias }))));

        let service = UrlService::new(Arc::new(repo));

        assert!(matches!(
            service.resolve("missing").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_info_returns_record() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_record()
            .withf(|alias| alias == "abc123")
            .times(1)
            .returning(|_| Ok(UrlRecord::new(3, "abc123", "https://a.com")));

        let service = UrlService::new(Arc::new(repo));
        let record = service.info("abc123").await.unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.url, "https://a.com");
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete()
            .times(1)
            .returning(|_| Err(AppError::not_found("Alias not found", json!({}))));

        let service = UrlService::new(Arc::new(repo));

        assert!(matches!(
            service.delete("gone").await,
            Err(AppError::NotFound { .. })
        ));
    }
}
