//! The persisted journal document.
//!
//! The whole application state is stored as one JSON document under a single
//! key and rehydrated as one document at startup.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Submission;
use crate::enums::AutoFlagThreshold;

const fn default_deadline_warning_days() -> u32 {
    7
}

/// Journal-wide settings consumed by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalSettings {
    /// Which verification results force a submission to `flagged`.
    #[serde(default)]
    pub auto_flag_threshold: AutoFlagThreshold,

    /// Performer recorded on reviewer-driven audit entries. Empty means "Reviewer".
    #[serde(default)]
    pub default_reviewer_name: String,

    #[serde(default)]
    pub journal_name: String,

    /// Deadlines closer than this many days are reported as due soon.
    #[serde(default = "default_deadline_warning_days")]
    pub deadline_warning_days: u32,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            auto_flag_threshold: AutoFlagThreshold::default(),
            default_reviewer_name: String::new(),
            journal_name: String::new(),
            deadline_warning_days: default_deadline_warning_days(),
        }
    }
}

impl JournalSettings {
    /// Name recorded as performer for reviewer actions.
    #[must_use]
    pub fn reviewer_or_default(&self) -> &str {
        if self.default_reviewer_name.is_empty() {
            "Reviewer"
        } else {
            &self.default_reviewer_name
        }
    }
}

/// All submissions plus session-level selections and settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalState {
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub active_submission_id: Option<String>,
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub journal_name: String,
    #[serde(default)]
    pub settings: JournalSettings,
}

impl JournalState {
    /// Fresh state seeded with the given settings.
    #[must_use]
    pub fn with_settings(settings: JournalSettings) -> Self {
        Self {
            reviewer_name: settings.default_reviewer_name.clone(),
            journal_name: settings.journal_name.clone(),
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn submission(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    pub fn submission_mut(&mut self, id: &str) -> Option<&mut Submission> {
        self.submissions.iter_mut().find(|s| s.id == id)
    }
}
