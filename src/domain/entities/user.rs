//! User credential entity.

use chrono::{DateTime, Utc};

/// A user that may obtain bearer tokens via `/auth/login`.
///
/// `password_hash` is an argon2 PHC string and never leaves the server.
#[derive(Debug, Clone)]
pub struct UserCredential {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
