//! Placement slug validation.
//!
//! Slugs are stable external identifiers embedded in theme templates, so the
//! accepted shape is deliberately conservative: lowercase alphanumerics and
//! hyphens, no leading/trailing hyphen.

use regex::Regex;
use std::sync::LazyLock;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

pub const MAX_SLUG_LENGTH: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,
    #[error("slug must be at most {MAX_SLUG_LENGTH} characters, got {0}")]
    TooLong(usize),
    #[error("slug may only contain lowercase letters, digits and inner hyphens")]
    InvalidCharacters,
}

/// Validates a placement slug.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(SlugError::TooLong(slug.len()));
    }
    if !SLUG_REGEX.is_match(slug) {
        return Err(SlugError::InvalidCharacters);
    }
    Ok(())
}
