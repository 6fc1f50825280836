//! Free-form audit entries, settings, export and deadline queries.

use chrono::{DateTime, Utc};
use verity_core::timestamp;

use crate::deadline::{DeadlineState, deadline_status};
use crate::export::{AuditExport, ExportFormat, render};
use crate::ledger::AuditDraft;
use crate::outcome::Outcome;
use crate::service::JournalService;
use crate::updates::{SettingsUpdate, changed_fields};

impl JournalService {
    /// Append a caller-described entry to the submission's ledger. Returns
    /// the new entry id.
    pub fn add_audit_entry(&mut self, submission_id: &str, draft: AuditDraft) -> Outcome<String> {
        self.mutate(submission_id, |submission, _| {
            let entry = draft.stamp(timestamp::now());
            let id = entry.id.clone();
            tracing::debug!(submission_id, category = %entry.category, "Audit entry added");
            submission.audit_log.append(entry);
            Outcome::Applied(id)
        })
    }

    /// Patch the journal settings. Journal and reviewer names are mirrored
    /// onto the top-level state.
    pub fn update_settings(&mut self, update: SettingsUpdate) {
        let fields = changed_fields(&update);
        let state = self.state_mut();
        update.apply(&mut state.settings);
        if let Some(name) = update.journal_name {
            state.journal_name = name;
        }
        if let Some(name) = update.default_reviewer_name {
            state.reviewer_name = name;
        }
        tracing::debug!(?fields, "Settings updated");
        self.persist();
    }

    /// Render the submission's ledger for download. `None` for an unknown
    /// submission.
    #[must_use]
    pub fn export_audit_log(&self, submission_id: &str, format: ExportFormat) -> Option<AuditExport> {
        let submission = self.submission(submission_id)?;
        match render(
            &submission.audit_log,
            &submission.manuscript_id,
            format,
            Utc::now(),
        ) {
            Ok(export) => Some(export),
            Err(e) => {
                tracing::warn!(submission_id, error = %e, "Audit log export failed");
                None
            }
        }
    }

    /// Deadline standing of a submission at `now`, using the configured
    /// warning window. `None` for an unknown submission.
    #[must_use]
    pub fn deadline_of(&self, submission_id: &str, now: DateTime<Utc>) -> Option<DeadlineState> {
        let submission = self.submission(submission_id)?;
        Some(deadline_status(
            submission.deadline,
            now,
            self.settings().deadline_warning_days,
        ))
    }
}
