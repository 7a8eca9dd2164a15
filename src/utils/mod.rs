//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`password`] - argon2 password hashing

pub mod alias_generator;
pub mod password;
