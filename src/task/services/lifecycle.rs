//! Service layer for task creation, filtering, replacement, and removal.

use crate::error::ErrorKind;
use crate::task::{
    adapters::dto::{to_dto, to_dtos, to_entity},
    domain::{ParseTaskStatusError, TaskId, TaskStatus, TaskValidationError},
    dto::{CreateTaskDto, TaskDto, UpdateTaskDto},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::{domain::UserId, ports::UserRepository};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// A task field rule was violated.
    #[error("invalid task: {0}")]
    InvalidTask(#[from] TaskValidationError),

    /// A status filter is not one of the enumerated values.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The referenced user does not exist or could not be resolved.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Classifies the error for the boundary translator.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTask(_) => ErrorKind::InvalidTask,
            Self::InvalidStatus(_) => ErrorKind::InvalidStatus,
            Self::UserNotFound(_) => ErrorKind::UserNotFound,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task tracking orchestration service.
///
/// Reads users through the user repository but never writes to it.
#[derive(Clone)]
pub struct TaskService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<T, U, C> TaskService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            clock,
        }
    }

    /// Resolves `user_id`, treating any lookup failure as an absent user.
    async fn require_user(&self, user_id: &UserId) -> TaskServiceResult<()> {
        if let Err(err) = self.users.get_by_id(user_id).await {
            tracing::warn!(%user_id, error = %err, "task references an unknown user");
            return Err(TaskServiceError::UserNotFound(user_id.clone()));
        }
        Ok(())
    }

    /// Creates a task for an existing user.
    ///
    /// Any caller-supplied status is discarded: new tasks are always
    /// [`TaskStatus::Pending`]. Both timestamps carry the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::UserNotFound`] when the owner cannot be
    /// resolved, [`TaskServiceError::InvalidTask`] when the title is empty or
    /// the due date is absent, or [`TaskServiceError::Repository`] when the
    /// write fails.
    #[tracing::instrument(skip(self, draft), fields(user_id = %draft.user_id))]
    pub async fn create_task(&self, draft: CreateTaskDto) -> TaskServiceResult<TaskDto> {
        let CreateTaskDto {
            user_id,
            title,
            description,
            status: _,
            due_date,
        } = draft;
        let user_id = UserId::from(user_id);
        self.require_user(&user_id).await?;

        let id = TaskId::generate();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle.into());
        }
        let due_date = due_date.ok_or(TaskValidationError::MissingDueDate)?;

        let now = self.clock.utc();
        let task = to_entity(TaskDto {
            id,
            user_id,
            title,
            description,
            status: TaskStatus::Pending,
            due_date,
            created_at: now,
            updated_at: now,
        });
        self.tasks.create(&task).await?;

        tracing::info!(task_id = %task.id(), "task created");
        Ok(to_dto(&task))
    }

    /// Returns every task, or only those in the given status.
    ///
    /// An empty filter returns all tasks unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidStatus`] when a non-empty filter is
    /// not exactly one of `pending`, `in_progress`, or `completed`.
    #[tracing::instrument(skip(self))]
    pub async fn get_tasks(&self, status_filter: &str) -> TaskServiceResult<Vec<TaskDto>> {
        let tasks = if status_filter.is_empty() {
            self.tasks.list().await?
        } else {
            let status = TaskStatus::try_from(status_filter)?;
            self.tasks.list_by_status(status).await?
        };
        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(to_dtos(&tasks))
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task does not exist
    /// or the lookup fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_task(&self, id: &TaskId) -> TaskServiceResult<TaskDto> {
        let task = self.tasks.get_by_id(id).await?;
        Ok(to_dto(&task))
    }

    /// Replaces a task with the supplied view.
    ///
    /// Title, description, status, and due date are taken from `update`
    /// wholesale; identity, owner, and `created_at` come from the stored task.
    /// Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task does not exist,
    /// or [`TaskServiceError::InvalidTask`] when the owner is empty, the title
    /// is empty, the status is not enumerated, or the due date is absent.
    #[tracing::instrument(skip(self, update), fields(task_id = %update.id))]
    pub async fn update_task(&self, update: UpdateTaskDto) -> TaskServiceResult<TaskDto> {
        let UpdateTaskDto {
            id,
            title,
            description,
            status,
            due_date,
        } = update;
        let existing = to_dto(&self.tasks.get_by_id(&TaskId::from(id)).await?);

        if existing.user_id.is_empty() {
            return Err(TaskValidationError::MissingUserId.into());
        }
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle.into());
        }
        let status = TaskStatus::try_from(status.as_str())
            .map_err(|err| TaskValidationError::InvalidStatus(err.0))?;
        let due_date = due_date.ok_or(TaskValidationError::MissingDueDate)?;

        let replacement = to_entity(TaskDto {
            title,
            description,
            status,
            due_date,
            updated_at: self.clock.utc(),
            ..existing
        });
        let stored = self.tasks.update(&replacement).await?;

        tracing::info!(status = %stored.status(), "task updated");
        Ok(to_dto(&stored))
    }

    /// Removes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task does not exist
    /// or the removal fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_task(&self, id: &TaskId) -> TaskServiceResult<()> {
        self.tasks.delete(id).await?;
        tracing::info!("task deleted");
        Ok(())
    }

    /// Returns the tasks owned by an existing user.
    ///
    /// A user without tasks yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::UserNotFound`] when the user cannot be
    /// resolved, or [`TaskServiceError::Repository`] when the listing fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_tasks_by_user_id(&self, user_id: &UserId) -> TaskServiceResult<Vec<TaskDto>> {
        self.require_user(user_id).await?;
        let tasks = self.tasks.list_by_user(user_id).await?;
        Ok(to_dtos(&tasks))
    }
}
