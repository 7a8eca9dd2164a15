//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/url/*`, `/auth/me`     - Bearer token required
//! - `/auth/login`, `/auth/refresh`, `/ping`, `/health` - public
//! - anything else            - `404` JSON error
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` generated when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler yields `500`
//! - **Timeout** - Slow requests yield `408`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::fallback_handler;
use crate::api::middleware::{auth, request_id, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::{Router, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the routed application without timeout and path normalization.
///
/// Used directly by integration tests.
pub fn router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(protected)
        .merge(api::routes::public_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
        .layer(CatchPanicLayer::new())
}

/// Constructs the application served by [`crate::server::run`].
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling one request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = router(state).layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        request_timeout,
    ));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
