//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /url/{alias}`
///
/// # Response
///
/// `302 Found` with the target in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias does not exist.
/// Returns 500 Internal Server Error if the stored URL is not a valid header value.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.url_service.resolve(&alias).await.inspect_err(|e| {
        if matches!(e, AppError::NotFound { .. }) {
            tracing::info!(%alias, "Alias not found");
        }
    })?;

    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        tracing::error!(%alias, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Stored URL cannot be redirected to", json!({ "alias": alias }))
    })?;

    tracing::debug!(%alias, %target, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
