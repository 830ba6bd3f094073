//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (storage, networking, UI).
//!
//! Both records validate at construction time: once a `Category` or
//! `Profile` exists, its name (and username) is trimmed and non-blank,
//! and its id is assigned and immutable. Nothing here persists anything.

mod category;
mod profile;

pub use category::Category;
pub use profile::Profile;

use thiserror::Error;

/// Malformed caller input.
///
/// Always raised synchronously on the construction/validation path and
/// never absorbed by repository operations. Contrast with malformed
/// *persisted* data, which reads back as an empty document instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string was empty or whitespace-only.
    #[error("{0} must not be empty")]
    Blank(&'static str),
}

/// Trim `value` and reject blank input.
pub(crate) fn require_non_blank(
    value: &str,
    field: &'static str,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(trimmed.to_string())
}
