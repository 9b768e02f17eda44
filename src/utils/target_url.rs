//! Validation of submitted target URLs.

use crate::error::AppError;
use serde_json::json;

/// Scheme prefixes a target URL may start with.
pub const ACCEPTED_SCHEMES: &[&str] = &["http://", "https://"];

/// Validates a submitted URL and returns it with surrounding whitespace removed.
///
/// # Rules
///
/// - Must not be empty after trimming
/// - Must start with `http://` or `https://` (case-sensitive)
///
/// The URL is otherwise stored verbatim, so two submissions deduplicate only when
/// their trimmed strings are identical.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with a message suitable for end users.
pub fn validate_target_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "Please enter a URL.",
            json!({ "reason": "empty" }),
        ));
    }

    if !ACCEPTED_SCHEMES
        .iter()
        .any(|scheme| trimmed.starts_with(scheme))
    {
        return Err(AppError::bad_request(
            "Please include http:// or https:// at the start.",
            json!({ "reason": "unsupported_scheme", "url": trimmed }),
        ));
    }

    Ok(trimmed.to_string())
}
