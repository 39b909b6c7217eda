//! Alias generation and validation utilities.
//!
//! Generated aliases are not checked for collisions here. A collision with an
//! existing alias surfaces as a storage conflict on insert.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 6;

/// Maximum length accepted for a user-supplied alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Symbols generated aliases are drawn from.
pub const ALIAS_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Characters allowed in a user-supplied alias.
pub static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Aliases that collide with routed path segments.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Generates a random alias of `len` symbols from [`ALIAS_ALPHABET`].
///
/// # Examples
///
/// ```
/// use shortener::utils::alias::{generate_alias, ALIAS_LENGTH};
///
/// let alias = generate_alias(ALIAS_LENGTH);
/// assert_eq!(alias.len(), 6);
/// ```
pub fn generate_alias(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| ALIAS_ALPHABET[rng.random_range(0..ALIAS_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
/// - Cannot be a reserved path segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::validation(format!(
            "field alias must be 1-{MAX_ALIAS_LENGTH} characters"
        )));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::validation(
            "field alias can only contain letters, digits, '_' and '-'",
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::validation(format!(
            "field alias '{alias}' is reserved"
        )));
    }

    Ok(())
}
