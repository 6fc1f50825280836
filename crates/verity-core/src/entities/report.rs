use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SectionStatus, Verdict};
use crate::timestamp;

/// One titled block of a verification report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub content: String,
    pub status: SectionStatus,
    pub details: String,
}

/// Snapshot derived from a submission's verification results and assessment.
///
/// Recomputed in full on every generation; the previous report is replaced.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub id: String,
    #[serde(with = "timestamp::millis")]
    #[schemars(with = "String")]
    pub generated_at: DateTime<Utc>,
    pub overall_verdict: Verdict,
    pub summary: String,
    pub total_analyses: u32,
    pub verified: u32,
    pub discrepant: u32,
    pub cannot_verify: u32,
    pub recommendations: Vec<String>,
    pub sections: Vec<ReportSection>,
}

impl VerificationReport {
    /// Look up a section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}
