//! Snippet key validation.
//!
//! Keys name snippets on the command line and become part of the command
//! identifier exposed for each snippet, so they are restricted to a safe set:
//! - ASCII letters, digits, underscores (`_`) and hyphens (`-`)
//! - At least one character
//! - No whitespace anywhere
//!
//! Rules are checked in order and the first failure is reported.

use std::fmt;

/// Validates a snippet key.
///
/// # Examples
/// ```
/// use snipz::keys::{validate_key, KeyValidationError};
///
/// assert!(validate_key("greet").is_ok());
/// assert!(validate_key("todo-item_2").is_ok());
///
/// assert_eq!(validate_key("   "), Err(KeyValidationError::Empty));
/// assert_eq!(validate_key("two words"), Err(KeyValidationError::ContainsSpace));
/// assert_eq!(validate_key("a.b"), Err(KeyValidationError::InvalidCharacter('.')));
/// ```
pub fn validate_key(key: &str) -> Result<(), KeyValidationError> {
    if key.trim().is_empty() {
        return Err(KeyValidationError::Empty);
    }

    if key.chars().any(char::is_whitespace) {
        return Err(KeyValidationError::ContainsSpace);
    }

    if let Some(ch) = key.chars().find(|ch| !is_valid_key_char(*ch)) {
        return Err(KeyValidationError::InvalidCharacter(ch));
    }

    Ok(())
}

/// Boolean form of [`validate_key`].
pub fn is_valid_key(key: &str) -> bool {
    validate_key(key).is_ok()
}

fn is_valid_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Why a key was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidationError {
    /// Empty, or only whitespace
    Empty,
    /// Contains a space or other whitespace character
    ContainsSpace,
    /// Contains a character outside `[A-Za-z0-9_-]`
    InvalidCharacter(char),
}

impl fmt::Display for KeyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValidationError::Empty => write!(f, "empty key"),
            KeyValidationError::ContainsSpace => write!(f, "contains space"),
            KeyValidationError::InvalidCharacter(ch) => write!(
                f,
                "invalid characters: '{}' (only letters, digits, underscore, and hyphen allowed)",
                ch
            ),
        }
    }
}

impl std::error::Error for KeyValidationError {}
