//! Error types for entity store operations.

use std::sync::Arc;
use thiserror::Error;

/// Result type for entity store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by [`super::EntityStore`].
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No entry exists under the given key.
    #[error("entry not found: {0}")]
    NotFound(String),

    /// An entry already exists under the given key.
    #[error("duplicate entry identifier: {0}")]
    DuplicateId(String),

    /// An existing entry conflicts with the value being inserted.
    #[error("conflicting entry: {0}")]
    Conflict(String),

    /// The collection lock could not be acquired.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
