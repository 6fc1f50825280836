//! Initial journal settings.

use serde::{Deserialize, Serialize};
use verity_core::enums::AutoFlagThreshold;
use verity_core::state::JournalSettings;

use crate::error::ConfigError;

const fn default_deadline_warning_days() -> u32 {
    7
}

/// Journal settings used to seed the state when nothing has been persisted yet.
///
/// Once a journal document exists, its own settings win; reviewers change them
/// at runtime through the engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub auto_flag_threshold: AutoFlagThreshold,

    #[serde(default)]
    pub default_reviewer_name: String,

    #[serde(default)]
    pub journal_name: String,

    #[serde(default = "default_deadline_warning_days")]
    pub deadline_warning_days: u32,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            auto_flag_threshold: AutoFlagThreshold::default(),
            default_reviewer_name: String::new(),
            journal_name: String::new(),
            deadline_warning_days: default_deadline_warning_days(),
        }
    }
}

impl JournalConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `deadline_warning_days` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deadline_warning_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "journal.deadline_warning_days".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Convert into the settings block of a fresh journal document.
    #[must_use]
    pub fn to_settings(&self) -> JournalSettings {
        JournalSettings {
            auto_flag_threshold: self.auto_flag_threshold,
            default_reviewer_name: self.default_reviewer_name.clone(),
            journal_name: self.journal_name.clone(),
            deadline_warning_days: self.deadline_warning_days,
        }
    }
}
