//! Persistence error types for verity-engine.

use thiserror::Error;

/// Errors from a [`KeyValueStore`](crate::store::KeyValueStore).
///
/// These never leave the engine: the service logs them and keeps working
/// from its in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document is not valid journal state, or the state could
    /// not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The value does not fit in the store's quota.
    #[error("Quota exceeded: {len} bytes requested, limit is {limit}")]
    QuotaExceeded { limit: usize, len: usize },

    /// The store cannot be used at all.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
