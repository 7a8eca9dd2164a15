//! Core domain entities.
//!
//! - [`UrlRecord`] - An alias to URL mapping
//! - [`UserCredential`] - A user allowed to log in

pub mod url_record;
pub mod user;

pub use url_record::UrlRecord;
pub use user::UserCredential;
