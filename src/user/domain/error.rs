//! Error types for user field validation.

use thiserror::Error;

/// Field class that failed validation on a user draft.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserValidationError {
    /// The email is empty or does not match `localpart@domain.tld`.
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    /// The password is empty or shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    InvalidPassword {
        /// Required minimum length in characters.
        min: usize,
    },

    /// The username length is outside the permitted range.
    #[error("username '{value}' must be between {min} and {max} characters")]
    InvalidUsername {
        /// Rejected username.
        value: String,
        /// Minimum length in characters.
        min: usize,
        /// Maximum length in characters.
        max: usize,
    },
}

impl UserValidationError {
    /// Returns the name of the offending field class.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "email",
            Self::InvalidPassword { .. } => "password",
            Self::InvalidUsername { .. } => "username",
        }
    }
}
