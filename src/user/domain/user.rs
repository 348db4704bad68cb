//! Stored user entity.

use super::UserId;
use chrono::{DateTime, Utc};

/// A registered user as held by the repository.
///
/// The password is kept exactly as supplied. Hashing is not performed; the
/// value must never leave the service boundary (see
/// [`crate::api::UserResponse`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a user entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Password as supplied at registration.
    pub password: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Reconstructs a user from its stored fields.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
            password: data.password,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the stored password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
