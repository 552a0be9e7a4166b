//! Page content validation rules.
//!
//! Handlers run these before touching the store so that missing required
//! fields surface as client errors rather than constraint failures.

use crate::error::CoreError;

/// Validate a page title: required, non-blank.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Page title must not be empty".into()));
    }
    Ok(())
}

/// Validate page body content: required, non-empty.
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.is_empty() {
        return Err(CoreError::Validation("Page body must not be empty".into()));
    }
    Ok(())
}
