//! In-memory user repository backed by an [`EntityStore`].

use async_trait::async_trait;

use crate::store::{EntityStore, StoreError};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    store: EntityStore<UserId, User>,
}

impl InMemoryUserRepository {
    /// Creates a repository over a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository over an existing store handle.
    #[must_use]
    pub const fn with_store(store: EntityStore<UserId, User>) -> Self {
        Self { store }
    }
}

fn map_store_error(err: StoreError, id: &UserId) -> UserRepositoryError {
    match err {
        StoreError::NotFound(_) => UserRepositoryError::NotFound(id.clone()),
        StoreError::DuplicateId(_) => UserRepositoryError::DuplicateUser(id.clone()),
        StoreError::Conflict(existing) => UserRepositoryError::persistence(
            std::io::Error::other(format!("unexpected conflict with user {existing}")),
        ),
        StoreError::Persistence(source) => UserRepositoryError::Persistence(source),
    }
}

fn map_scan_error(err: StoreError) -> UserRepositoryError {
    match err {
        StoreError::Persistence(source) => UserRepositoryError::Persistence(source),
        other => UserRepositoryError::persistence(other),
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> UserRepositoryResult<()> {
        let email = user.email();
        self.store
            .insert_unique(user.id().clone(), user.clone(), |existing| {
                existing.email() == email
            })
            .map_err(|err| match err {
                StoreError::Conflict(_) => UserRepositoryError::DuplicateEmail(email.to_owned()),
                other => map_store_error(other, user.id()),
            })
    }

    async fn get_by_id(&self, id: &UserId) -> UserRepositoryResult<User> {
        self.store.get(id).map_err(|err| map_store_error(err, id))
    }

    async fn get_by_email(&self, email: &str) -> UserRepositoryResult<User> {
        self.store
            .find(|user| user.email() == email)
            .map_err(map_scan_error)?
            .into_iter()
            .next()
            .ok_or_else(|| UserRepositoryError::EmailNotFound(email.to_owned()))
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        self.store.list().map_err(map_scan_error)
    }

    async fn delete(&self, id: &UserId) -> UserRepositoryResult<()> {
        self.store.delete(id).map_err(|err| map_store_error(err, id))
    }
}
