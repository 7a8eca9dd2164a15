//! Handlers for login, token refresh and identity lookup.

use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::auth::{LoginRequest, MeResponse, RefreshRequest, TokenResponse};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges email and password for an access/refresh token pair.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "password": "secret" }
/// ```
///
/// # Response
///
/// ```json
/// { "access_token": "eyJ...", "refresh_token": "eyJ..." }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be decoded.
/// Returns 401 Unauthorized with the same message for an unknown email and
/// for a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(req) = payload?;

    let pair = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(pair.into()))
}

/// Exchanges a refresh token for a new token pair.
///
/// # Endpoint
///
/// `POST /auth/refresh`
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be decoded.
/// Returns 401 Unauthorized if the token is invalid, expired or not a
/// refresh token.
pub async fn refresh_handler(
    State(state): State<AppState>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(req) = payload?;

    let pair = state.auth_service.refresh(&req.refresh_token)?;

    Ok(Json(pair.into()))
}

/// Returns the identity resolved by the authentication middleware.
///
/// # Endpoint
///
/// `GET /auth/me`
pub async fn me_handler(Extension(user): Extension<AuthUser>) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: user.user_id,
    })
}
