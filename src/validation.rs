//! Task title validation
//!
//! Runs before any request leaves the client. Pure and synchronous: it never
//! touches the network.

use thiserror::Error;

/// Minimum number of characters in a trimmed title
pub const MIN_TITLE_LENGTH: usize = 3;

/// Reasons a proposed title is rejected locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is empty after trimming
    #[error("title is required")]
    Required,

    /// Title is shorter than [`MIN_TITLE_LENGTH`] after trimming
    #[error("title must be at least 3 characters")]
    TooShort,
}

/// Validate a raw title, returning the trimmed value on success
///
/// Length is counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use tasklist::validation::{validate_title, ValidationError};
///
/// assert_eq!(validate_title("  Buy milk "), Ok("Buy milk".to_string()));
/// assert_eq!(validate_title("   "), Err(ValidationError::Required));
/// assert_eq!(validate_title("hi"), Err(ValidationError::TooShort));
/// ```
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.chars().count() < MIN_TITLE_LENGTH {
        return Err(ValidationError::TooShort);
    }

    Ok(trimmed.to_string())
}
