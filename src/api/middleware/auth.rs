//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::application::services::TokenKind;
use crate::{error::AppError, state::AppState};

/// Identity resolved from a verified access token.
///
/// Inserted into the request extensions; handlers read it with
/// `Extension<AuthUser>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Authenticates requests using access tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The scheme is matched case-insensitively.
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature and expiry via [`crate::application::services::TokenService`]
/// 3. Require an access token (refresh tokens are rejected)
/// 4. Attach [`AuthUser`] to the request
/// 5. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` without calling
/// the wrapped handler if any step fails.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url/{alias}", get(redirect_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Authorization header is missing or invalid" }),
            )
        })?;

    let claims = st.token_service.verify(token)?;

    if claims.sub != TokenKind::Access {
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Access token required" }),
        ));
    }

    req.extensions_mut().insert(AuthUser {
        user_id: claims.uid,
    });

    Ok(next.run(req).await)
}

/// Extracts the token from a `Bearer <token>` header value.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
