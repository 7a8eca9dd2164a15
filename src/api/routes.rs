//! API route configuration.
//!
//! Routes are split into the bearer-protected set and the public set; the
//! auth gate is attached in [`crate::routes::router`].

use crate::api::handlers::{
    delete_handler, health_handler, info_handler, login_handler, me_handler, ping_handler,
    redirect_handler, refresh_handler, save_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes requiring a valid access token.
///
/// # Endpoints
///
/// - `POST   /url`               - Save a URL under an alias
/// - `GET    /url/{alias}`       - Redirect to the stored URL
/// - `DELETE /url/{alias}`       - Delete an alias
/// - `GET    /url/{alias}/info`  - Stored record for an alias
/// - `GET    /auth/me`           - Identity of the caller
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", get(redirect_handler).delete(delete_handler))
        .route("/url/{alias}/info", get(info_handler))
        .route("/auth/me", get(me_handler))
}

/// Routes open to everyone.
///
/// # Endpoints
///
/// - `POST /auth/login`   - Exchange credentials for tokens
/// - `POST /auth/refresh` - Exchange a refresh token for a new pair
/// - `GET  /ping`         - Liveness probe
/// - `GET  /health`       - Database health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/refresh", post(refresh_handler))
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
}
