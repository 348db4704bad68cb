//! Service layer for user registration, lookup, and removal.

use crate::error::ErrorKind;
use crate::user::{
    adapters::dto::{to_dto, to_dtos, to_entity},
    domain::{UserId, UserValidationError, validate_email, validate_password, validate_username},
    dto::{CreateUserDto, UserDto},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for user operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// A draft field failed validation.
    #[error("validation error on {field}: {0}", field = .0.field())]
    Validation(#[from] UserValidationError),

    /// Another user already holds the email address.
    #[error("email already exists: {0}")]
    EmailAlreadyExists(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

impl UserServiceError {
    /// Classifies the error for the boundary translator.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::EmailAlreadyExists(_) => ErrorKind::EmailAlreadyExists,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User registration orchestration service.
#[derive(Clone)]
pub struct UserService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new user.
    ///
    /// Validates email, then password, then username; rejects an email that
    /// is already registered; issues a `U`-prefixed identifier and stamps
    /// both timestamps with the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Validation`] naming the first offending
    /// field, [`UserServiceError::EmailAlreadyExists`] when the email is
    /// taken, or [`UserServiceError::Repository`] when the lookup or the
    /// write fails for any other reason.
    #[tracing::instrument(skip(self, draft), fields(username = %draft.username))]
    pub async fn create_user(&self, draft: CreateUserDto) -> UserServiceResult<UserDto> {
        let CreateUserDto {
            username,
            email,
            password,
        } = draft;

        validate_email(&email)?;
        validate_password(&password)?;
        validate_username(&username)?;

        match self.repository.get_by_email(&email).await {
            Ok(_) => {
                tracing::warn!("rejected registration for an email already in use");
                return Err(UserServiceError::EmailAlreadyExists(email));
            }
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let now = self.clock.utc();
        let dto = UserDto {
            id: UserId::generate(),
            username,
            email,
            password,
            created_at: now,
            updated_at: now,
        };
        let user = to_entity(dto);

        self.repository.create(&user).await.map_err(|err| match err {
            UserRepositoryError::DuplicateEmail(taken) => {
                UserServiceError::EmailAlreadyExists(taken)
            }
            other => other.into(),
        })?;

        tracing::info!(user_id = %user.id(), "user created");
        Ok(to_dto(&user))
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the user does not exist
    /// or the lookup fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: &UserId) -> UserServiceResult<UserDto> {
        let user = self.repository.get_by_id(id).await?;
        Ok(to_dto(&user))
    }

    /// Returns every registered user in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the listing fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self) -> UserServiceResult<Vec<UserDto>> {
        let users = self.repository.list().await?;
        tracing::debug!(count = users.len(), "listed users");
        Ok(to_dtos(&users))
    }

    /// Removes a user by identifier.
    ///
    /// Tasks that reference the user are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the user does not exist
    /// or the removal fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: &UserId) -> UserServiceResult<()> {
        self.repository.delete(id).await?;
        tracing::info!("user deleted");
        Ok(())
    }
}
