//! Wire-shaped transfer objects exchanged with the task service.
//!
//! Dates travel as `YYYY-MM-DD`. A malformed date fails decoding before the
//! service is called; an absent date decodes to `None` and is rejected by the
//! service.

use crate::task::domain::{TaskId, TaskStatus};
use crate::user::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Strict `YYYY-MM-DD` decoding: exactly ten characters, zero-padded, no sign.
mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de};

    const FORMAT: &str = "%Y-%m-%d";

    fn is_canonical(raw: &str) -> bool {
        raw.len() == 10
            && raw.bytes().enumerate().all(|(position, byte)| {
                if position == 4 || position == 7 {
                    byte == b'-'
                } else {
                    byte.is_ascii_digit()
                }
            })
    }

    fn parse<E: de::Error>(raw: &str) -> Result<NaiveDate, E> {
        if !is_canonical(raw) {
            return Err(E::custom(format!("date must be YYYY-MM-DD, got '{raw}'")));
        }
        NaiveDate::parse_from_str(raw, FORMAT)
            .map_err(|err| E::custom(format!("invalid calendar date '{raw}': {err}")))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw)
    }

    pub(super) fn deserialize_optional<'de, D>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse::<D::Error>(&raw))
            .transpose()
    }
}

/// Creation draft decoded from an inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskDto {
    /// Owning user identifier.
    #[serde(default)]
    pub user_id: String,
    /// Short title.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Caller-requested status; ignored, new tasks are always pending.
    #[serde(default)]
    pub status: Option<String>,
    /// Calendar due date.
    #[serde(default, deserialize_with = "calendar_date::deserialize_optional")]
    pub due_date: Option<NaiveDate>,
}

impl CreateTaskDto {
    /// Creates a draft with an owner, a title, and a due date.
    #[must_use]
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            description: String::new(),
            status: None,
            due_date: Some(due_date),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets a requested status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Full replacement view of a task decoded from an inbound request.
///
/// Every overlay field replaces the stored value; an omitted field is not
/// merged from the stored task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskDto {
    /// Identifier of the task to replace, taken from the request path.
    #[serde(default)]
    pub id: String,
    /// Replacement title.
    #[serde(default)]
    pub title: String,
    /// Replacement description.
    #[serde(default)]
    pub description: String,
    /// Replacement status.
    #[serde(default)]
    pub status: String,
    /// Replacement due date.
    #[serde(default, deserialize_with = "calendar_date::deserialize_optional")]
    pub due_date: Option<NaiveDate>,
}

impl UpdateTaskDto {
    /// Creates a replacement view of the task `id`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: status.into(),
            due_date: Some(due_date),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Full task representation returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDto {
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
    /// Calendar due date.
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub due_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}
