use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AuditLog, ReportedAnalysis, RobAssessment, VerificationReport, VerificationResult};
use crate::enums::{Priority, SubmissionStatus};
use crate::timestamp;

/// A manuscript author.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_corresponding: bool,
}

/// Reference to the analytical dataset submitted with a manuscript.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDataset {
    pub id: String,
    pub file_name: String,
    pub row_count: u64,
    pub column_count: u64,
    #[serde(with = "timestamp::millis")]
    #[schemars(with = "String")]
    pub uploaded_at: DateTime<Utc>,
    pub sha256_hash: String,
    pub integrity_verified: bool,
}

/// Root aggregate of the verification workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub manuscript_id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub journal: String,
    #[serde(with = "timestamp::millis")]
    #[schemars(with = "String")]
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub assigned_reviewer: Option<String>,
    pub dataset: Option<SubmissionDataset>,
    #[serde(default)]
    pub reported_analyses: Vec<ReportedAnalysis>,
    #[serde(default)]
    pub verification_results: Vec<VerificationResult>,
    pub verification_report: Option<VerificationReport>,
    #[serde(default)]
    pub audit_log: AuditLog,
    pub risk_of_bias_assessment: Option<RobAssessment>,
    #[serde(default)]
    pub notes: String,
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub study_type: Option<String>,
}

impl Submission {
    #[must_use]
    pub fn analysis(&self, analysis_id: &str) -> Option<&ReportedAnalysis> {
        self.reported_analyses.iter().find(|a| a.id == analysis_id)
    }

    /// The current verification result for `analysis_id`, if one was recorded.
    #[must_use]
    pub fn result_for(&self, analysis_id: &str) -> Option<&VerificationResult> {
        self.verification_results
            .iter()
            .find(|r| r.analysis_id == analysis_id)
    }
}
