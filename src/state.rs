//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{AuthService, TokenService, UrlService};
use crate::domain::repositories::{UrlRepository, UserRepository};

/// Services shared by all requests.
///
/// Repositories are held as trait objects so the same router runs over
/// PostgreSQL in production and over in-memory stores in tests.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        urls: Arc<dyn UrlRepository>,
        users: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(urls)),
            auth_service: Arc::new(AuthService::new(users, token_service.clone())),
            token_service,
        }
    }
}
