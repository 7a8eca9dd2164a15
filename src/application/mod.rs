//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Saving, resolving and deleting aliases
//! - [`services::auth_service::AuthService`] - Login and token refresh
//! - [`services::token_service::TokenService`] - JWT issuing and verification

pub mod services;
