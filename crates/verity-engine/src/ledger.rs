//! Audit entry construction.
//!
//! Every mutating command describes its change as an [`AuditDraft`]; the
//! service stamps the draft with an id and timestamp and prepends it to the
//! submission's [`AuditLog`](verity_core::entities::AuditLog). The builders
//! below fix the action, details and metadata wording for each command.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use verity_core::entities::{
    AuditEntry, ReportedAnalysis, RobAssessment, Submission, VerificationResult,
};
use verity_core::enums::{AuditCategory, SubmissionStatus, Verdict};
use verity_core::ids::{PREFIX_AUDIT, generate_id};
use verity_core::metadata::Metadata;

/// An audit entry without its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDraft {
    pub action: String,
    pub performed_by: String,
    pub details: String,
    pub category: AuditCategory,
    #[serde(default)]
    pub metadata: Metadata,
}

impl AuditDraft {
    pub fn new(
        category: AuditCategory,
        action: impl Into<String>,
        performed_by: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            performed_by: performed_by.into(),
            details: details.into(),
            category,
            metadata: Metadata::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Stamp the draft with a fresh id and `timestamp`.
    #[must_use]
    pub fn stamp(self, timestamp: DateTime<Utc>) -> AuditEntry {
        AuditEntry {
            id: generate_id(PREFIX_AUDIT),
            timestamp,
            action: self.action,
            performed_by: self.performed_by,
            details: self.details,
            category: self.category,
            metadata: self.metadata,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-command drafts
// ---------------------------------------------------------------------------

pub fn submission_created(submission: &Submission) -> AuditDraft {
    AuditDraft::new(
        AuditCategory::Submission,
        "Submission created",
        submission.assigned_reviewer.as_deref().unwrap_or("System"),
        format!(
            "Manuscript \"{}\" ({}) added to the review queue.",
            submission.title, submission.manuscript_id
        ),
    )
    .with_metadata(
        Metadata::new()
            .text("manuscriptId", submission.manuscript_id.clone())
            .text("title", submission.title.clone()),
    )
}

pub fn status_changed(
    old: SubmissionStatus,
    new: SubmissionStatus,
    performed_by: &str,
) -> AuditDraft {
    AuditDraft::new(
        AuditCategory::Submission,
        format!("Status changed to \"{new}\""),
        performed_by,
        format!("Submission status changed from \"{old}\" to \"{new}\"."),
    )
    .with_metadata(
        Metadata::new()
            .tag("oldStatus", old)
            .tag("newStatus", new),
    )
}

/// Status change applied by the policy after a report was generated.
pub fn status_auto_changed(
    old: SubmissionStatus,
    new: SubmissionStatus,
    performed_by: &str,
) -> AuditDraft {
    let mut draft = status_changed(old, new, performed_by);
    draft.metadata.insert("trigger", "report");
    draft
}

pub fn analysis_added(analysis: &ReportedAnalysis, performed_by: &str) -> AuditDraft {
    AuditDraft::new(
        AuditCategory::Verification,
        "Reported analysis added",
        performed_by,
        format!(
            "Analysis \"{}\" ({}) added. Reference: {}",
            analysis.description, analysis.analysis_type, analysis.table_or_figure_ref
        ),
    )
    .with_metadata(
        Metadata::new()
            .text("analysisId", analysis.id.clone())
            .tag("type", analysis.analysis_type)
            .text("ref", analysis.table_or_figure_ref.clone()),
    )
}

pub fn verification_recorded(result: &VerificationResult) -> AuditDraft {
    AuditDraft::new(
        AuditCategory::Verification,
        format!("Verification recorded: {}", result.match_outcome),
        result.reproduced_by.clone(),
        format!(
            "Analysis verified. Match: {}. Severity: {}.",
            result.match_outcome, result.severity
        ),
    )
    .with_metadata(
        Metadata::new()
            .text("analysisId", result.analysis_id.clone())
            .tag("match", result.match_outcome)
            .tag("severity", result.severity),
    )
}

pub fn report_generated(
    verdict: Verdict,
    results_checked: usize,
    total_analyses: u32,
    performed_by: &str,
) -> AuditDraft {
    AuditDraft::new(
        AuditCategory::Report,
        format!("Verification report generated: {}", verdict.label()),
        performed_by,
        format!(
            "Overall verdict: {}. {results_checked} analyses checked.",
            verdict.label()
        ),
    )
    .with_metadata(
        Metadata::new()
            .tag("verdict", verdict)
            .number("totalAnalyses", i64::from(total_analyses)),
    )
}

pub fn assessment_saved(assessment: &RobAssessment) -> AuditDraft {
    AuditDraft::new(
        AuditCategory::Assessment,
        format!(
            "Risk of Bias assessment saved ({})",
            assessment.tool.as_str().to_uppercase()
        ),
        assessment.assessed_by.clone(),
        format!(
            "Overall risk: {}. Tool: {}.",
            assessment.overall_risk, assessment.tool
        ),
    )
    .with_metadata(
        Metadata::new()
            .tag("tool", assessment.tool)
            .tag("overallRisk", assessment.overall_risk),
    )
}
