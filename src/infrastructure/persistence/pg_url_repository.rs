//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    alias: String,
    url: String,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.alias, row.url)
    }
}

/// PostgreSQL repository for the `urls` table.
///
/// Alias uniqueness is enforced by the `urls_alias_key` constraint; a
/// concurrent save of the same alias loses at the insert.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn alias_not_found(alias: &str) -> AppError {
    AppError::not_found("Alias not found", json!({ "alias": alias }))
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO urls (url, alias)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(url)
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict { .. } => AppError::conflict(
                "URL with this alias already exists",
                json!({ "alias": alias }),
            ),
            other => other,
        })?;

        Ok(id)
    }

    async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| alias_not_found(alias))
    }

    async fn get_record(&self, alias: &str) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>("SELECT id, alias, url FROM urls WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(UrlRecord::from).ok_or_else(|| alias_not_found(alias))
    }

    async fn delete(&self, alias: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(alias_not_found(alias));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
