//! Random alias generation.
//!
//! Aliases carry no uniqueness guarantee of their own; a collision surfaces as
//! [`crate::error::AppError::Conflict`] from the store.

use rand::{Rng, distr::Alphanumeric};

/// Length of aliases generated when the caller supplies none.
pub const ALIAS_LENGTH: usize = 6;

/// Generates a random alias of exactly `length` characters.
///
/// Characters are drawn uniformly from `A-Z`, `a-z` and `0-9`.
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::alias_generator::generate_alias;
///
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
