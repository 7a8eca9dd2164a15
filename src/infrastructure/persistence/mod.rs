//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL storage and retrieval
//! - [`PgUserRepository`] - Credential lookup and provisioning

pub mod pg_url_repository;
pub mod pg_user_repository;

pub use pg_url_repository::PgUrlRepository;
pub use pg_user_repository::PgUserRepository;
