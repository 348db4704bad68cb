//! Outward-facing response shapes.

use crate::task::{
    domain::{TaskId, TaskStatus},
    dto::TaskDto,
};
use crate::user::{domain::UserId, dto::UserDto};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user as shown to callers; has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Envelope for a list of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    /// Listed users.
    pub users: Vec<UserResponse>,
}

impl From<Vec<UserDto>> for UsersResponse {
    fn from(dtos: Vec<UserDto>) -> Self {
        Self {
            users: dtos.into_iter().map(UserResponse::from).collect(),
        }
    }
}

/// A task as shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Owning user identifier.
    pub user_id: UserId,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Calendar due date, `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<TaskDto> for TaskResponse {
    fn from(dto: TaskDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            title: dto.title,
            description: dto.description,
            status: dto.status,
            due_date: dto.due_date,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Envelope for a list of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksResponse {
    /// Listed tasks.
    pub tasks: Vec<TaskResponse>,
}

impl From<Vec<TaskDto>> for TasksResponse {
    fn from(dtos: Vec<TaskDto>) -> Self {
        Self {
            tasks: dtos.into_iter().map(TaskResponse::from).collect(),
        }
    }
}
