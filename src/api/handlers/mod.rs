//! HTTP request handlers for API endpoints.
//!
//! Each handler wraps exactly one service call and is the only place where an
//! [`crate::error::AppError`] kind is turned into a transport status.

pub mod auth;
pub mod delete;
pub mod health;
pub mod info;
pub mod ping;
pub mod redirect;
pub mod save;

pub use auth::{login_handler, me_handler, refresh_handler};
pub use delete::delete_handler;
pub use health::{fallback_handler, health_handler};
pub use info::info_handler;
pub use ping::ping_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;
