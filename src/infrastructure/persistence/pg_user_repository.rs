//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UserCredential;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pass_hash: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for UserCredential {
    fn from(row: UserRow) -> Self {
        UserCredential {
            id: row.id,
            email: row.email,
            password_hash: row.pass_hash,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for the `users` table.
///
/// Only argon2 hashes are stored; raw passwords never reach the database.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, pass_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UserCredential::from))
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<UserCredential, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id, email, pass_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict { .. } => {
                AppError::conflict("Email already registered", json!({ "email": email }))
            }
            other => other,
        })?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<UserCredential>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, pass_hash, created_at FROM users ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UserCredential::from).collect())
    }
}
