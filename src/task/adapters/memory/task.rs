//! In-memory task repository backed by an [`EntityStore`].

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

use crate::store::{EntityStore, StoreError};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task repository.
///
/// The clock stamps `updated_at` on every replacement.
pub struct InMemoryTaskRepository<C: Clock + Send + Sync = DefaultClock> {
    store: EntityStore<TaskId, Task>,
    clock: Arc<C>,
}

impl<C: Clock + Send + Sync> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates a repository over a fresh, empty store using the system
    /// clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(EntityStore::new(), Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Send + Sync> InMemoryTaskRepository<C> {
    /// Creates a repository over an existing store handle with the given
    /// clock.
    #[must_use]
    pub const fn with_store(store: EntityStore<TaskId, Task>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }
}

fn map_store_error(err: StoreError, id: &TaskId) -> TaskRepositoryError {
    match err {
        StoreError::NotFound(_) => TaskRepositoryError::NotFound(id.clone()),
        StoreError::DuplicateId(_) => TaskRepositoryError::DuplicateTask(id.clone()),
        other => map_scan_error(other),
    }
}

fn map_scan_error(err: StoreError) -> TaskRepositoryError {
    match err {
        StoreError::Persistence(source) => TaskRepositoryError::Persistence(source),
        other => TaskRepositoryError::persistence(other),
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskRepository for InMemoryTaskRepository<C> {
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.store
            .insert_new(task.id().clone(), task.clone())
            .map_err(|err| map_store_error(err, task.id()))
    }

    async fn get_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        self.store.get(id).map_err(|err| map_store_error(err, id))
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.store.list().map_err(map_scan_error)
    }

    async fn list_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.store
            .find(|task| task.status() == status)
            .map_err(map_scan_error)
    }

    async fn list_by_user(&self, user_id: &UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.store
            .find(|task| task.user_id() == user_id)
            .map_err(map_scan_error)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        self.store
            .replace_with(task.id(), |_| {
                let mut replacement = task.clone();
                replacement.touch(&*self.clock);
                replacement
            })
            .map_err(|err| map_store_error(err, task.id()))
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        self.store.delete(id).map_err(|err| map_store_error(err, id))
    }
}
