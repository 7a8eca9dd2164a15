//! Handler for alias introspection.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url::UrlInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for an alias.
///
/// # Endpoint
///
/// `GET /url/{alias}/info`
///
/// # Response
///
/// ```json
/// { "id": 1, "alias": "abc123", "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the alias does not exist.
pub async fn info_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let record = state.url_service.info(&alias).await?;

    Ok(Json(record.into()))
}
