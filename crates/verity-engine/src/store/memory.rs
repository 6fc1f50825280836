//! In-memory store with an optional byte quota.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::KeyValueStore;
use crate::error::StoreError;

/// Shared in-memory map. Clones see the same entries.
///
/// With a quota, a write whose total stored size (keys plus values) would
/// exceed the limit fails with [`StoreError::QuotaExceeded`] and leaves the
/// previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(limit),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock();
        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let len = others + key.len() + value.len();
            if len > limit {
                return Err(StoreError::QuotaExceeded { limit, len });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
