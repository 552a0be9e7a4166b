//! User account constants and validation rules.

use crate::error::CoreError;

/// Role label assigned to every account at sign-up. Roles are free-text;
/// no authorization model beyond this single label exists.
pub const DEFAULT_ROLE: &str = "user";

/// Validate a username: required, non-blank.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation("Username must not be empty".into()));
    }
    Ok(())
}

/// Validate a sign-up password: required, non-empty.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::Validation("Password must not be empty".into()));
    }
    Ok(())
}
