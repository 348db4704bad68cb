//! Wire-shaped transfer objects exchanged with the user service.

use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration draft decoded from an inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserDto {
    /// Requested username.
    #[serde(default)]
    pub username: String,
    /// Requested email address.
    #[serde(default)]
    pub email: String,
    /// Requested password.
    #[serde(default)]
    pub password: String,
}

impl CreateUserDto {
    /// Creates a registration draft.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Full user representation returned by the service.
///
/// Carries the stored password so it can round-trip to storage; the password
/// is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Stored password.
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}
