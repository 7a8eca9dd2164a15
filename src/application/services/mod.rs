//! Business logic services for the application layer.

pub mod auth_service;
pub mod token_service;
pub mod url_service;

pub use auth_service::AuthService;
pub use token_service::{TokenClaims, TokenKind, TokenPair, TokenService};
pub use url_service::{SavedUrl, UrlService};
