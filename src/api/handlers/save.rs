//! Handler for saving a URL under an alias.

use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::url::{SaveRequest, SaveResponse, describe_validation_errors};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under the given alias, or under a generated one.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "example" }
/// ```
///
/// `alias` is optional; a random 6-character alias is used when it is absent
/// or empty.
///
/// # Response
///
/// Always `200 OK` for client-side problems, with the outcome in the body:
///
/// ```json
/// { "status": "OK", "alias": "example" }
/// { "status": "Error", "error": "url already exists" }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error on storage failures.
pub async fn save_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Failed to decode request");
            return Ok(Json(SaveResponse::error("failed to decode request")));
        }
    };

    tracing::debug!(request = ?req, "Request body decoded");

    if let Err(errors) = req.validate() {
        tracing::warn!(error = %errors, "Invalid request");
        return Ok(Json(SaveResponse::error(describe_validation_errors(&errors))));
    }

    match state
        .url_service
        .save(&req.url, req.alias.as_deref())
        .await
    {
        Ok(saved) => {
            tracing::info!(id = saved.id, alias = %saved.alias, user_id = user.user_id, "URL saved");
            Ok(Json(SaveResponse::ok(saved.alias)))
        }
        Err(AppError::Conflict { .. }) => {
            tracing::info!(url = %req.url, "URL already exists");
            Ok(Json(SaveResponse::error("url already exists")))
        }
        Err(AppError::Validation { message, .. }) => Ok(Json(SaveResponse::error(message))),
        Err(e) => Err(e),
    }
}
