//! Login and token refresh.

use serde_json::json;
use std::sync::{Arc, LazyLock};

use crate::application::services::token_service::{TokenKind, TokenPair, TokenService};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Verified against when the email is unknown.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("dummy-password-for-unknown-users").unwrap_or_default());

/// Service exchanging credentials for bearer tokens.
///
/// An unknown email and a wrong password produce the same
/// [`AppError::Unauthorized`], so callers cannot probe which emails exist.
pub struct AuthService<U: UserRepository + ?Sized> {
    users: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U: UserRepository + ?Sized> AuthService<U> {
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Checks `email`/`password` and issues an access/refresh pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with [`INVALID_CREDENTIALS`] for an
    /// unknown user or a wrong password.
    /// Returns [`AppError::Internal`] on database or signing errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            let _ = verify_password(password, &DUMMY_HASH);
            tracing::warn!("Login failed: unknown email");
            return Err(invalid_credentials());
        };

        let matches = verify_password(password, &user.password_hash).unwrap_or_else(|e| {
            tracing::error!(user_id = user.id, error = %e, "Stored password hash is unreadable");
            false
        });

        if !matches {
            tracing::warn!(user_id = user.id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        tracing::info!(user_id = user.id, "User logged in");
        self.tokens.issue_pair(user.id)
    }

    /// Exchanges a valid refresh token for a new pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid, expired,
    /// or is an access token.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.tokens.verify(refresh_token)?;

        if claims.sub != TokenKind::Refresh {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Refresh token required" }),
            ));
        }

        self.tokens.issue_pair(claims.uid)
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(INVALID_CREDENTIALS, json!({}))
}
