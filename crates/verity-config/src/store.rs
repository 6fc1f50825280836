//! Persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Key under which the journal document is stored.
pub const DEFAULT_STATE_KEY: &str = "rf_journal_component";

fn default_state_dir() -> PathBuf {
    PathBuf::from(".verity")
}

fn default_state_key() -> String {
    DEFAULT_STATE_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one `<key>.json` file per stored document.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,

    /// The single fixed key of the journal document.
    #[serde(default = "default_state_key")]
    pub state_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            state_key: default_state_key(),
        }
    }
}

impl StoreConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the key is empty or contains a
    /// path separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.state_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.state_key".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.state_key.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "store.state_key".into(),
                reason: "must not contain path separators".into(),
            });
        }
        Ok(())
    }

    /// Path of the file backing `state_key`.
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        self.state_dir.join(format!("{}.json", self.state_key))
    }
}
