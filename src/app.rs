//! Composition root wiring stores, repositories, and services.

use crate::store::EntityStore;
use crate::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use crate::user::{adapters::memory::InMemoryUserRepository, services::UserService};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// User service over the in-memory repository.
pub type InMemoryUserService<C> = UserService<InMemoryUserRepository, C>;

/// Task service over the in-memory repositories.
pub type InMemoryTaskService<C> =
    TaskService<InMemoryTaskRepository<C>, InMemoryUserRepository, C>;

/// An isolated instance of the backend: one store per entity type, shared by
/// the services built on top of them.
pub struct App<C: Clock + Send + Sync = DefaultClock> {
    users: InMemoryUserService<C>,
    tasks: InMemoryTaskService<C>,
}

impl App {
    /// Builds a fresh, empty backend using the system clock.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl<C: Clock + Send + Sync> App<C> {
    /// Builds a fresh, empty backend using `clock` for every timestamp.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        let user_repository = Arc::new(InMemoryUserRepository::with_store(EntityStore::new()));
        let task_repository = Arc::new(InMemoryTaskRepository::with_store(
            EntityStore::new(),
            Arc::clone(&clock),
        ));
        tracing::debug!("in-memory backend assembled");
        Self {
            users: UserService::new(Arc::clone(&user_repository), Arc::clone(&clock)),
            tasks: TaskService::new(task_repository, user_repository, clock),
        }
    }

    /// Returns the user service.
    #[must_use]
    pub const fn users(&self) -> &InMemoryUserService<C> {
        &self.users
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &InMemoryTaskService<C> {
        &self.tasks
    }
}
