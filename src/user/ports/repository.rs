//! Repository port for user storage and lookup.

use crate::error::ErrorKind;
use crate::user::domain::{User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User storage contract.
///
/// The repository assigns no identifiers; callers supply `user.id()`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user under its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the identifier is
    /// already in use or [`UserRepositoryError::DuplicateEmail`] when another
    /// stored user has the same email.
    async fn create(&self, user: &User) -> UserRepositoryResult<()>;

    /// Returns the user with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no such user exists.
    async fn get_by_id(&self, id: &UserId) -> UserRepositoryResult<User>;

    /// Returns the first user whose email equals `email`.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::EmailNotFound`] when no user matches.
    async fn get_by_email(&self, email: &str) -> UserRepositoryResult<User>;

    /// Returns every stored user in unspecified order.
    async fn list(&self) -> UserRepositoryResult<Vec<User>>;

    /// Removes the user with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no such user exists.
    async fn delete(&self, id: &UserId) -> UserRepositoryResult<()>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// A user with the same email already exists.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// No user has the given identifier.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// No user has the given email.
    #[error("no user registered with email: {0}")]
    EmailNotFound(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns whether the error reports an absent user.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::EmailNotFound(_))
    }

    /// Classifies the error for the boundary translator.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateUser(_) => ErrorKind::DuplicateId,
            Self::DuplicateEmail(_) => ErrorKind::EmailAlreadyExists,
            Self::NotFound(_) | Self::EmailNotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}
