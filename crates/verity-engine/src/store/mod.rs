//! Persistence collaborators.
//!
//! The whole [`JournalState`] is stored as one JSON document under a single
//! key. [`StatePersistence`] binds a [`KeyValueStore`] to that key and turns
//! every store failure into a logged warning: a failed load reads as "no
//! prior state", a failed save leaves the in-memory state authoritative.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use verity_core::state::JournalState;

use crate::error::StoreError;

/// A string key-value store, the contract of browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Loads and saves the journal document under a fixed key.
#[derive(Clone)]
pub struct StatePersistence {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for StatePersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatePersistence")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl StatePersistence {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persisted state, or `None` when nothing usable is stored.
    pub fn load(&self) -> Option<JournalState> {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to load journal state; starting empty");
                None
            }
        }
    }

    /// Persist `state`. Failures are logged and swallowed.
    pub fn save(&self, state: &JournalState) {
        if let Err(e) = self.try_save(state) {
            tracing::warn!(key = %self.key, error = %e, "Failed to save journal state");
        }
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the store read fails or the document does not parse.
    pub fn try_load(&self) -> Result<Option<JournalState>, StoreError> {
        match self.store.get(&self.key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the store write fails.
    pub fn try_save(&self, state: &JournalState) -> Result<(), StoreError> {
        let raw = serde_json::to_string(state)?;
        self.store.set(&self.key, &raw)
    }
}
