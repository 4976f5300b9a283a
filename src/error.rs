//! Error types for the entity access layer.

use thiserror::Error;

use crate::tree::ErrorTree;

/// Result type for entity operations.
pub type EntityResult<T> = Result<T, EntityError>;

/// Result type for raw store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in entity operations.
#[derive(Debug, Error)]
pub enum EntityError {
    /// Input or stored data failed schema validation.
    /// Carries the full report; see [`ErrorTree`].
    #[error("validation failed: {0}")]
    Validation(ErrorTree),

    /// Entity not found. Only `must_get` raises this; plain `get` reports
    /// absence as `Ok(None)`.
    #[error("entity not found: {0}")]
    NotFound(String),

    /// Failure from the underlying store, passed through unchanged.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors that can occur in the underlying key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failure reported by the store backend.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Stored bytes could not be interpreted as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Wraps an arbitrary backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}
