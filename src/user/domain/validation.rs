//! Field rules for user registration drafts.
//!
//! Each rule is a pure function returning the [`UserValidationError`] that
//! names the offending field class.

use super::UserValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum username length in characters.
pub const MIN_USERNAME_LEN: usize = 3;

/// Maximum username length in characters.
pub const MAX_USERNAME_LEN: usize = 20;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Validates that the email is present and matches `localpart@domain.tld`.
///
/// # Errors
///
/// Returns [`UserValidationError::InvalidEmail`] otherwise.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    let matches = EMAIL_REGEX
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email));
    if email.is_empty() || !matches {
        return Err(UserValidationError::InvalidEmail(email.to_owned()));
    }
    Ok(())
}

/// Validates that the password is at least [`MIN_PASSWORD_LEN`] characters.
///
/// # Errors
///
/// Returns [`UserValidationError::InvalidPassword`] otherwise.
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserValidationError::InvalidPassword {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Validates that the username length lies in
/// [`MIN_USERNAME_LEN`]..=[`MAX_USERNAME_LEN`].
///
/// # Errors
///
/// Returns [`UserValidationError::InvalidUsername`] otherwise.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    let length = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&length) {
        return Err(UserValidationError::InvalidUsername {
            value: username.to_owned(),
            min: MIN_USERNAME_LEN,
            max: MAX_USERNAME_LEN,
        });
    }
    Ok(())
}
