//! Closed error taxonomy shared by every service.
//!
//! Each service error reports an [`ErrorKind`] so the boundary translator in
//! [`crate::api`] can map failures to responses by structural comparison
//! instead of inspecting messages.

use std::fmt;

/// Classification of a failure surfaced by the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An entity is absent for the given identifier or email.
    NotFound,
    /// A create draft has a malformed or missing field.
    Validation,
    /// A task draft or replacement violates a task field rule.
    InvalidTask,
    /// A status filter is not one of the enumerated values.
    InvalidStatus,
    /// An identifier collided with an existing entity.
    DuplicateId,
    /// The email address is already registered to another user.
    EmailAlreadyExists,
    /// A task operation referenced a user that does not exist.
    UserNotFound,
    /// A fault inside the system rather than in the caller's input.
    Internal,
}

impl ErrorKind {
    /// Returns the canonical label of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation_error",
            Self::InvalidTask => "invalid_task",
            Self::InvalidStatus => "invalid_status",
            Self::DuplicateId => "duplicate_id",
            Self::EmailAlreadyExists => "email_already_exists",
            Self::UserNotFound => "user_not_found",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
