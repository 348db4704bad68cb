//! Error types for task validation and status parsing.

use thiserror::Error;

/// Field rule violated by a task draft or replacement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The task has no owning user identifier.
    #[error("task user id must not be empty")]
    MissingUserId,

    /// The task title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task has no due date.
    #[error("task due date is required")]
    MissingDueDate,

    /// The status is not one of the enumerated values.
    #[error("invalid task status: '{0}'")]
    InvalidStatus(String),
}

/// Error returned while parsing a task status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: '{0}', expected one of pending, in_progress, completed")]
pub struct ParseTaskStatusError(pub String);
