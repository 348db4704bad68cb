//! Generic concurrent keyed collection backing the in-memory repositories.
//!
//! An [`EntityStore`] is an owned handle: cloning it shares the same
//! underlying collection, so one store can be constructed per entity type and
//! passed into the repository that owns it. Each operation takes the lock for
//! its own duration only. Readers proceed concurrently; a writer excludes all
//! other readers and writers.

mod error;

pub use error::{StoreError, StoreResult};

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe keyed collection with reader/writer lock discipline.
#[derive(Debug)]
pub struct EntityStore<K, V> {
    entries: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for EntityStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for EntityStore<K, V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K, V> EntityStore<K, V>
where
    K: Eq + Hash + Clone + Display,
    V: Clone,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<K, V>>> {
        self.entries
            .read()
            .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<K, V>>> {
        self.entries
            .write()
            .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
    }

    /// Stores `value` under `id`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn put(&self, id: K, value: V) -> StoreResult<()> {
        self.write()?.insert(id, value);
        Ok(())
    }

    /// Stores `value` under `id` only when no entry exists for `id`.
    ///
    /// The existence check and the insertion happen under one write lock.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] when `id` is already present.
    pub fn insert_new(&self, id: K, value: V) -> StoreResult<()> {
        self.insert_unique(id, value, |_| false)
    }

    /// Stores `value` under `id` unless `id` is taken or an existing value
    /// satisfies `conflicts`.
    ///
    /// Both checks and the insertion happen under one write lock, so a
    /// uniqueness rule over a non-key field holds at every instant.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] when `id` is already present, or
    /// [`StoreError::Conflict`] carrying the key of the first conflicting
    /// entry.
    pub fn insert_unique<P>(&self, id: K, value: V, conflicts: P) -> StoreResult<()>
    where
        P: Fn(&V) -> bool,
    {
        let mut entries = self.write()?;
        if entries.contains_key(&id) {
            return Err(StoreError::DuplicateId(id.to_string()));
        }
        if let Some(existing) = entries
            .iter()
            .find_map(|(key, existing)| conflicts(existing).then_some(key))
        {
            return Err(StoreError::Conflict(existing.to_string()));
        }
        entries.insert(id, value);
        Ok(())
    }

    /// Replaces the entry stored under `id` with the value produced by
    /// `update`, which receives the current entry.
    ///
    /// Returns a copy of the value that was stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when `id` is absent.
    pub fn replace_with<F>(&self, id: &K, update: F) -> StoreResult<V>
    where
        F: FnOnce(&V) -> V,
    {
        let mut entries = self.write()?;
        let current = entries
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *current = update(current);
        Ok(current.clone())
    }

    /// Returns a copy of the entry stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when `id` is absent.
    pub fn get(&self, id: &K) -> StoreResult<V> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Returns whether an entry exists under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn contains(&self, id: &K) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    /// Returns an independent snapshot of every stored value.
    ///
    /// Iteration order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn list(&self) -> StoreResult<Vec<V>> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Returns an independent snapshot of the values matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn find<P>(&self, predicate: P) -> StoreResult<Vec<V>>
    where
        P: Fn(&V) -> bool,
    {
        Ok(self
            .read()?
            .values()
            .filter(|value| predicate(value))
            .cloned()
            .collect())
    }

    /// Removes the entry stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when `id` is absent.
    pub fn delete(&self, id: &K) -> StoreResult<()> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Returns the number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns whether the store holds no entries.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
