//! # verity-config
//!
//! Layered configuration loading for Verity using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERITY_*` prefix, `__` as separator)
//! 2. Project-level `.verity/config.toml`
//! 3. User-level `~/.config/verity/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERITY_JOURNAL__AUTO_FLAG_THRESHOLD` -> `journal.auto_flag_threshold`,
//! `VERITY_STORE__STATE_DIR` -> `store.state_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use verity_config::VerityConfig;
//!
//! let config = VerityConfig::load_with_dotenv().expect("config");
//! println!("threshold: {}", config.journal.auto_flag_threshold);
//! ```

mod error;
mod journal;
mod store;

pub use error::ConfigError;
pub use journal::JournalConfig;
pub use store::{DEFAULT_STATE_KEY, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerityConfig {
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl VerityConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".verity/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VERITY_").split("__"))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.journal.validate()?;
        self.store.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verity").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::enums::AutoFlagThreshold;

    #[test]
    fn default_config_loads() {
        let config = VerityConfig::default();
        assert_eq!(
            config.journal.auto_flag_threshold,
            AutoFlagThreshold::MajorOnly
        );
        assert_eq!(config.store.state_key, DEFAULT_STATE_KEY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = VerityConfig::from_figment(&VerityConfig::figment())
                .map_err(|e| e.to_string())?;
            assert_eq!(config.journal.deadline_warning_days, 7);
            assert!(config.journal.default_reviewer_name.is_empty());
            Ok(())
        });
    }
}
