//! Liveness probe.

/// `GET /ping` → `pong`.
pub async fn ping_handler() -> &'static str {
    "pong"
}
