//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Alias to URL mappings
//! - [`UserRepository`] - Login credentials
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod url_repository;
pub mod user_repository;

pub use url_repository::UrlRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
