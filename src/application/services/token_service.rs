//! Issuing and verifying signed bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Default lifetime of access tokens, in seconds (15 minutes).
pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 15 * 60;

/// Default lifetime of refresh tokens, in seconds (7 days).
pub const DEFAULT_REFRESH_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Purpose of a token, carried in the `sub` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims. Self-contained; nothing is stored server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub uid: i64,
    pub sub: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

/// An access/refresh token pair handed out on login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signs and verifies HS256 tokens with a secret fixed at construction.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Creates a service with the default TTLs.
    pub fn with_default_ttls(secret: &str) -> Self {
        Self::new(
            secret,
            Duration::seconds(DEFAULT_ACCESS_TTL_SECONDS),
            Duration::seconds(DEFAULT_REFRESH_TTL_SECONDS),
        )
    }

    pub fn issue_access(&self, user_id: i64) -> Result<String, AppError> {
        self.sign(user_id, TokenKind::Access, self.access_ttl)
    }

    pub fn issue_refresh(&self, user_id: i64) -> Result<String, AppError> {
        self.sign(user_id, TokenKind::Refresh, self.refresh_ttl)
    }

    pub fn issue_pair(&self, user_id: i64) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.issue_access(user_id)?,
            refresh_token: self.issue_refresh(user_id)?,
        })
    }

    fn sign(&self, user_id: i64, kind: TokenKind, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            uid: user_id,
            sub: kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            AppError::internal("Failed to issue token", json!({}))
        })
    }

    /// Verifies signature, algorithm and expiry, returning the claims.
    ///
    /// A token is rejected from the second its `exp` is reached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, foreign-signed,
    /// non-HS256 or expired tokens.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            invalid_token()
        })?;

        if data.claims.exp <= Utc::now().timestamp() {
            return Err(invalid_token());
        }

        Ok(data.claims)
    }
}

fn invalid_token() -> AppError {
    AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid or expired token" }))
}
