//! Verification result command.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use verity_core::entities::VerificationResult;
use verity_core::enums::{MatchOutcome, Severity};
use verity_core::ids::{PREFIX_RESULT, generate_id};
use verity_core::timestamp;

use crate::aggregate::derive_analysis_status;
use crate::ledger;
use crate::outcome::Outcome;
use crate::service::JournalService;

/// A reproduction attempt as entered by the reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDraft {
    pub analysis_id: String,
    #[serde(default)]
    pub reproduced_results: String,
    #[serde(rename = "match")]
    pub match_outcome: MatchOutcome,
    #[serde(default)]
    pub discrepancy_details: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, with = "timestamp::millis_option")]
    pub reproduced_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reproduced_by: String,
    #[serde(default)]
    pub notes: String,
}

impl ResultDraft {
    pub fn new(
        analysis_id: impl Into<String>,
        match_outcome: MatchOutcome,
        severity: Severity,
        reproduced_by: impl Into<String>,
    ) -> Self {
        Self {
            analysis_id: analysis_id.into(),
            reproduced_results: String::new(),
            match_outcome,
            discrepancy_details: String::new(),
            severity,
            reproduced_at: None,
            reproduced_by: reproduced_by.into(),
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn reproduced_results(mut self, results: impl Into<String>) -> Self {
        self.reproduced_results = results.into();
        self
    }

    #[must_use]
    pub fn discrepancy_details(mut self, details: impl Into<String>) -> Self {
        self.discrepancy_details = details.into();
        self
    }
}

impl JournalService {
    /// Record the verification result for an analysis.
    ///
    /// Replaces any earlier result for the same analysis, re-derives that
    /// analysis' status and appends one `verification` entry. Returns the
    /// new result id. Does not run the auto-flag policy.
    pub fn add_verification_result(
        &mut self,
        submission_id: &str,
        draft: ResultDraft,
    ) -> Outcome<String> {
        self.mutate(submission_id, |submission, settings| {
            let Some(idx) = submission
                .reported_analyses
                .iter()
                .position(|a| a.id == draft.analysis_id)
            else {
                tracing::debug!(
                    submission_id,
                    analysis_id = %draft.analysis_id,
                    "Analysis not found; verification result ignored"
                );
                return Outcome::NotFound;
            };

            let now = timestamp::now();
            let reproduced_by = if draft.reproduced_by.is_empty() {
                settings.reviewer_or_default().to_string()
            } else {
                draft.reproduced_by
            };
            let result = VerificationResult {
                id: generate_id(PREFIX_RESULT),
                analysis_id: draft.analysis_id,
                reproduced_results: draft.reproduced_results,
                match_outcome: draft.match_outcome,
                discrepancy_details: draft.discrepancy_details,
                severity: draft.severity,
                reproduced_at: draft.reproduced_at.map_or(now, timestamp::truncate),
                reproduced_by,
                notes: draft.notes,
            };
            let id = result.id.clone();
            let entry = ledger::verification_recorded(&result).stamp(now);

            submission.reported_analyses[idx].status = derive_analysis_status(Some(&result));
            match submission
                .verification_results
                .iter_mut()
                .find(|r| r.analysis_id == result.analysis_id)
            {
                Some(existing) => *existing = result,
                None => submission.verification_results.push(result),
            }
            submission.audit_log.append(entry);

            tracing::debug!(submission_id, result_id = %id, "Verification result recorded");
            Outcome::Applied(id)
        })
    }
}
