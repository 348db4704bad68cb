//! Repository port for task storage, filtering, and replacement.

use crate::error::ErrorKind;
use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// The repository assigns no identifiers; callers supply `task.id()`.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task under its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier is
    /// already in use.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no such task exists.
    async fn get_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task>;

    /// Returns every stored task in unspecified order.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks whose status equals `status`.
    async fn list_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks owned by `user_id`.
    async fn list_by_user(&self, user_id: &UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites the stored task wholesale and returns the stored copy.
    ///
    /// The stored `updated_at` is refreshed to the repository's current time
    /// regardless of the value carried by `task`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Removes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no such task exists.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error for the boundary translator.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateTask(_) => ErrorKind::DuplicateId,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}
