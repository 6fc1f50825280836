//! Journal settings update builder.

use serde::Serialize;
use verity_core::enums::AutoFlagThreshold;
use verity_core::state::JournalSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_flag_threshold: Option<AutoFlagThreshold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_reviewer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_warning_days: Option<u32>,
}

impl SettingsUpdate {
    pub(crate) fn apply(&self, settings: &mut JournalSettings) {
        if let Some(threshold) = self.auto_flag_threshold {
            settings.auto_flag_threshold = threshold;
        }
        if let Some(name) = &self.default_reviewer_name {
            settings.default_reviewer_name.clone_from(name);
        }
        if let Some(name) = &self.journal_name {
            settings.journal_name.clone_from(name);
        }
        // The warning window is at least one day.
        if let Some(days) = self.deadline_warning_days.filter(|d| *d > 0) {
            settings.deadline_warning_days = days;
        }
    }
}

pub struct SettingsUpdateBuilder(SettingsUpdate);

impl Default for SettingsUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SettingsUpdate::default())
    }

    #[must_use]
    pub fn auto_flag_threshold(mut self, threshold: AutoFlagThreshold) -> Self {
        self.0.auto_flag_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn default_reviewer_name(mut self, name: impl Into<String>) -> Self {
        self.0.default_reviewer_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn journal_name(mut self, name: impl Into<String>) -> Self {
        self.0.journal_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn deadline_warning_days(mut self, days: u32) -> Self {
        self.0.deadline_warning_days = Some(days);
        self
    }

    #[must_use]
    pub fn build(self) -> SettingsUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_only_set_fields() {
        let mut settings = JournalSettings::default();
        SettingsUpdateBuilder::new()
            .auto_flag_threshold(AutoFlagThreshold::CriticalOnly)
            .build()
            .apply(&mut settings);
        assert_eq!(settings.auto_flag_threshold, AutoFlagThreshold::CriticalOnly);
        assert_eq!(settings.deadline_warning_days, 7);
        assert!(settings.journal_name.is_empty());
    }

    #[test]
    fn zero_warning_days_is_ignored() {
        let mut settings = JournalSettings::default();
        SettingsUpdateBuilder::new()
            .deadline_warning_days(0)
            .build()
            .apply(&mut settings);
        assert_eq!(settings.deadline_warning_days, 7);
    }
}
