//! Handler for alias deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Response
///
/// `204 No Content`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias does not exist (including when it
/// was already deleted).
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&alias).await?;

    tracing::info!(%alias, "URL deleted");

    Ok(StatusCode::NO_CONTENT)
}
