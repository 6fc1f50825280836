//! Reported analysis commands.
//!
//! Adding an analysis is audited; updating and deleting one are not.

use serde::{Deserialize, Serialize};
use verity_core::entities::ReportedAnalysis;
use verity_core::enums::AnalysisType;
use verity_core::ids::{PREFIX_ANALYSIS, generate_id};
use verity_core::timestamp;

use crate::aggregate::derive_analysis_status;
use crate::ledger;
use crate::outcome::Outcome;
use crate::service::JournalService;
use crate::updates::{AnalysisUpdate, changed_fields};

/// A reported analysis as entered by the reviewer. Its status is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDraft {
    /// Caller-chosen id; a fresh one is allocated when absent or taken.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub analysis_type: AnalysisType,
    pub description: String,
    #[serde(default)]
    pub reported_results: String,
    #[serde(default)]
    pub table_or_figure_ref: String,
    #[serde(default)]
    pub page_number: Option<u32>,
}

impl AnalysisDraft {
    pub fn new(analysis_type: AnalysisType, description: impl Into<String>) -> Self {
        Self {
            id: None,
            analysis_type,
            description: description.into(),
            reported_results: String::new(),
            table_or_figure_ref: String::new(),
            page_number: None,
        }
    }

    #[must_use]
    pub fn reported_results(mut self, results: impl Into<String>) -> Self {
        self.reported_results = results.into();
        self
    }

    #[must_use]
    pub fn table_or_figure_ref(mut self, reference: impl Into<String>) -> Self {
        self.table_or_figure_ref = reference.into();
        self
    }

    #[must_use]
    pub const fn page_number(mut self, page: u32) -> Self {
        self.page_number = Some(page);
        self
    }
}

impl JournalService {
    /// Append an analysis to the submission. Returns the analysis id.
    pub fn add_reported_analysis(
        &mut self,
        submission_id: &str,
        draft: AnalysisDraft,
    ) -> Outcome<String> {
        self.mutate(submission_id, |submission, settings| {
            let id = match draft.id {
                Some(id) if !id.is_empty() && submission.analysis(&id).is_none() => id,
                _ => generate_id(PREFIX_ANALYSIS),
            };
            let analysis = ReportedAnalysis {
                status: derive_analysis_status(submission.result_for(&id)),
                id: id.clone(),
                analysis_type: draft.analysis_type,
                description: draft.description,
                reported_results: draft.reported_results,
                table_or_figure_ref: draft.table_or_figure_ref,
                page_number: draft.page_number,
            };
            let entry = ledger::analysis_added(&analysis, settings.reviewer_or_default())
                .stamp(timestamp::now());
            submission.reported_analyses.push(analysis);
            submission.audit_log.append(entry);
            tracing::debug!(submission_id, analysis_id = %id, "Reported analysis added");
            Outcome::Applied(id)
        })
    }

    /// Patch an analysis in place. Its status is re-derived, never taken
    /// from the patch.
    pub fn update_reported_analysis(
        &mut self,
        submission_id: &str,
        analysis_id: &str,
        update: AnalysisUpdate,
    ) -> Outcome<()> {
        let fields = changed_fields(&update);
        self.mutate(submission_id, |submission, _| {
            let status = derive_analysis_status(submission.result_for(analysis_id));
            let Some(analysis) = submission
                .reported_analyses
                .iter_mut()
                .find(|a| a.id == analysis_id)
            else {
                tracing::debug!(submission_id, analysis_id, "Analysis not found; update ignored");
                return Outcome::NotFound;
            };
            update.apply(analysis);
            analysis.status = status;
            tracing::debug!(submission_id, analysis_id, ?fields, "Reported analysis updated");
            Outcome::Applied(())
        })
    }

    /// Remove an analysis together with its verification result.
    pub fn delete_reported_analysis(
        &mut self,
        submission_id: &str,
        analysis_id: &str,
    ) -> Outcome<()> {
        self.mutate(submission_id, |submission, _| {
            let before = submission.reported_analyses.len();
            submission.reported_analyses.retain(|a| a.id != analysis_id);
            if submission.reported_analyses.len() == before {
                tracing::debug!(submission_id, analysis_id, "Analysis not found; delete ignored");
                return Outcome::NotFound;
            }
            submission
                .verification_results
                .retain(|r| r.analysis_id != analysis_id);
            tracing::debug!(submission_id, analysis_id, "Reported analysis deleted");
            Outcome::Applied(())
        })
    }
}
