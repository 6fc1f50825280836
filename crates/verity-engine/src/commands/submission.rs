//! Submission commands: creation, edits, status transitions and selection.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use verity_core::entities::{Author, AuditLog, ReportedAnalysis, Submission, SubmissionDataset};
use verity_core::enums::{AnalysisStatus, Priority, SubmissionStatus};
use verity_core::ids::{PREFIX_ANALYSIS, PREFIX_SUBMISSION, generate_id};
use verity_core::timestamp;

use crate::ledger;
use crate::outcome::Outcome;
use crate::service::JournalService;
use crate::updates::{SubmissionUpdate, changed_fields};

/// Fields a caller may supply when creating a submission. Everything is
/// optional; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSubmission {
    pub manuscript_id: String,
    pub title: String,
    pub authors: Vec<Author>,
    pub journal: String,
    #[serde(with = "timestamp::millis_option")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub assigned_reviewer: Option<String>,
    pub dataset: Option<SubmissionDataset>,
    pub reported_analyses: Vec<ReportedAnalysis>,
    pub notes: String,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub study_type: Option<String>,
}

/// Submission counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStats {
    pub total: usize,
    pub pending: usize,
    pub in_review: usize,
    pub verified: usize,
    pub flagged: usize,
    pub rejected: usize,
}

/// Move `submission` to `next`, recording a `submission` entry.
///
/// Returns `false` without touching the ledger when the status is unchanged.
pub(crate) fn transition(
    submission: &mut Submission,
    next: SubmissionStatus,
    performed_by: &str,
    from_report: bool,
    at: DateTime<Utc>,
) -> bool {
    let old = submission.status;
    if !old.can_transition_to(next) {
        return false;
    }
    submission.status = next;
    let draft = if from_report {
        ledger::status_auto_changed(old, next, performed_by)
    } else {
        ledger::status_changed(old, next, performed_by)
    };
    submission.audit_log.append(draft.stamp(at));
    true
}

impl JournalService {
    /// Create a submission in `pending` and make it the active one.
    ///
    /// Seeds the ledger with a single "Submission created" entry. Seeded
    /// analyses with an empty or repeated id get a fresh one.
    pub fn create_submission(&mut self, new: NewSubmission) -> String {
        let now = timestamp::now();
        let id = generate_id(PREFIX_SUBMISSION);

        let mut seen = HashSet::new();
        let reported_analyses = new
            .reported_analyses
            .into_iter()
            .map(|mut a| {
                if a.id.is_empty() || seen.contains(&a.id) {
                    a.id = generate_id(PREFIX_ANALYSIS);
                }
                seen.insert(a.id.clone());
                a.status = AnalysisStatus::Pending;
                a
            })
            .collect();

        let mut submission = Submission {
            id: id.clone(),
            manuscript_id: new.manuscript_id,
            title: new.title,
            authors: new.authors,
            journal: new.journal,
            submitted_at: new.submitted_at.map_or(now, timestamp::truncate),
            status: SubmissionStatus::Pending,
            assigned_reviewer: new.assigned_reviewer,
            dataset: new.dataset,
            reported_analyses,
            verification_results: Vec::new(),
            verification_report: None,
            audit_log: AuditLog::new(),
            risk_of_bias_assessment: None,
            notes: new.notes,
            deadline: new.deadline,
            priority: new.priority,
            study_type: new.study_type,
        };
        submission
            .audit_log
            .append(ledger::submission_created(&submission).stamp(now));

        tracing::debug!(
            submission_id = %id,
            manuscript_id = %submission.manuscript_id,
            "Submission created"
        );

        let state = self.state_mut();
        state.submissions.push(submission);
        state.active_submission_id = Some(id.clone());
        self.persist();
        id
    }

    /// Patch editable fields. A status change inside the patch is recorded
    /// exactly like [`Self::set_status`]; other edits are not audited.
    pub fn update_submission(
        &mut self,
        submission_id: &str,
        update: SubmissionUpdate,
    ) -> Outcome<()> {
        let fields = changed_fields(&update);
        self.mutate(submission_id, |submission, settings| {
            let status = update.status;
            update.apply_fields(submission);
            if let Some(next) = status {
                transition(
                    submission,
                    next,
                    settings.reviewer_or_default(),
                    false,
                    timestamp::now(),
                );
            }
            tracing::debug!(submission_id, ?fields, "Submission updated");
            Outcome::Applied(())
        })
    }

    /// Manual status override. Any status may move to any other; writing the
    /// current status is a no-op that appends nothing.
    ///
    /// Returns whether the status changed.
    pub fn set_status(&mut self, submission_id: &str, status: SubmissionStatus) -> Outcome<bool> {
        self.mutate(submission_id, |submission, settings| {
            let old = submission.status;
            let changed = transition(
                submission,
                status,
                settings.reviewer_or_default(),
                false,
                timestamp::now(),
            );
            if changed {
                tracing::debug!(submission_id, %old, new = %status, "Status changed");
            }
            Outcome::Applied(changed)
        })
    }

    /// Select the submission the reviewer is working on. `None` clears the
    /// selection; an unknown id leaves it unchanged.
    pub fn set_active_submission(&mut self, submission_id: Option<&str>) -> Outcome<()> {
        if let Some(id) = submission_id {
            if self.submission(id).is_none() {
                tracing::debug!(submission_id = id, "Cannot activate unknown submission");
                return Outcome::NotFound;
            }
        }
        self.state_mut().active_submission_id = submission_id.map(str::to_string);
        self.persist();
        Outcome::Applied(())
    }

    #[must_use]
    pub fn submission_stats(&self) -> SubmissionStats {
        self.state()
            .submissions
            .iter()
            .fold(SubmissionStats::default(), |mut stats, s| {
                stats.total += 1;
                match s.status {
                    SubmissionStatus::Pending => stats.pending += 1,
                    SubmissionStatus::InReview => stats.in_review += 1,
                    SubmissionStatus::Verified => stats.verified += 1,
                    SubmissionStatus::Flagged => stats.flagged += 1,
                    SubmissionStatus::Rejected => stats.rejected += 1,
                }
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::derive_analysis_status;
    use crate::commands::ResultDraft;
    use crate::test_support::helpers::{analysis, test_service};
    use crate::updates::SubmissionUpdateBuilder;
    use pretty_assertions::assert_eq;
    use verity_core::enums::{AuditCategory, MatchOutcome, Severity};
    use verity_core::metadata::MetadataValue;

    fn create(svc: &mut JournalService) -> String {
        svc.create_submission(NewSubmission {
            manuscript_id: "JRR-2026-0042".into(),
            title: "Statins and delirium".into(),
            ..NewSubmission::default()
        })
    }

    #[test]
    fn create_seeds_one_entry_and_activates() {
        let mut svc = test_service();
        let id = create(&mut svc);
        let sub = svc.submission(&id).unwrap();
        assert_eq!(sub.status, SubmissionStatus::Pending);
        assert_eq!(sub.audit_log.len(), 1);
        let entry = sub.audit_log.latest().unwrap();
        assert_eq!(entry.action, "Submission created");
        assert_eq!(entry.performed_by, "System");
        assert_eq!(entry.category, AuditCategory::Submission);
        assert_eq!(entry.timestamp, sub.submitted_at);
        assert_eq!(svc.active_submission().map(|s| s.id.as_str()), Some(id.as_str()));
    }

    #[test]
    fn create_resets_seeded_analysis_status() {
        let mut svc = test_service();
        let mut seeded = analysis("");
        seeded.status = AnalysisStatus::Verified;
        let id = svc.create_submission(NewSubmission {
            reported_analyses: vec![seeded],
            ..NewSubmission::default()
        });
        let sub = svc.submission(&id).unwrap();
        assert_eq!(sub.reported_analyses[0].status, AnalysisStatus::Pending);
        assert!(sub.reported_analyses[0].id.starts_with("ana-"));
    }

    #[test]
    fn create_reallocates_duplicate_analysis_ids() {
        let mut svc = test_service();
        let id = svc.create_submission(NewSubmission {
            reported_analyses: vec![analysis("ana-dup"), analysis("ana-dup"), analysis("ana-dup")],
            ..NewSubmission::default()
        });
        let _ = svc.add_verification_result(
            &id,
            ResultDraft::new("ana-dup", MatchOutcome::Exact, Severity::None, "Dr. Okafor"),
        );

        let sub = svc.submission(&id).unwrap();
        let ids: HashSet<&str> = sub.reported_analyses.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(sub.reported_analyses[0].id, "ana-dup");
        for a in &sub.reported_analyses {
            assert_eq!(a.status, derive_analysis_status(sub.result_for(&a.id)));
        }
        assert_eq!(sub.reported_analyses[0].status, AnalysisStatus::Verified);
        assert_eq!(sub.reported_analyses[1].status, AnalysisStatus::Pending);
    }

    #[test]
    fn set_status_records_old_and_new() {
        let mut svc = test_service();
        let id = create(&mut svc);
        assert_eq!(
            svc.set_status(&id, SubmissionStatus::InReview),
            Outcome::Applied(true)
        );
        let sub = svc.submission(&id).unwrap();
        let entry = sub.audit_log.latest().unwrap();
        assert_eq!(entry.performed_by, "Reviewer");
        assert_eq!(
            entry.metadata.get("oldStatus").and_then(MetadataValue::as_text),
            Some("pending")
        );
        assert_eq!(
            entry.metadata.get("newStatus").and_then(MetadataValue::as_text),
            Some("in-review")
        );
    }

    #[test]
    fn same_status_is_a_no_op() {
        let mut svc = test_service();
        let id = create(&mut svc);
        assert_eq!(
            svc.set_status(&id, SubmissionStatus::Pending),
            Outcome::Applied(false)
        );
        assert_eq!(svc.submission(&id).unwrap().audit_log.len(), 1);
    }

    #[test]
    fn rejected_can_be_reopened() {
        let mut svc = test_service();
        let id = create(&mut svc);
        let _ = svc.set_status(&id, SubmissionStatus::Rejected);
        let _ = svc.set_status(&id, SubmissionStatus::InReview);
        let sub = svc.submission(&id).unwrap();
        assert_eq!(sub.status, SubmissionStatus::InReview);
        assert_eq!(sub.audit_log.len(), 3);
    }

    #[test]
    fn update_without_status_appends_nothing() {
        let mut svc = test_service();
        let id = create(&mut svc);
        let outcome = svc.update_submission(
            &id,
            SubmissionUpdateBuilder::new()
                .notes("Awaiting dataset")
                .priority(Priority::Urgent)
                .build(),
        );
        assert!(outcome.is_applied());
        let sub = svc.submission(&id).unwrap();
        assert_eq!(sub.notes, "Awaiting dataset");
        assert_eq!(sub.priority, Priority::Urgent);
        assert_eq!(sub.audit_log.len(), 1);
    }

    #[test]
    fn update_with_status_is_audited_like_set_status() {
        let mut svc = test_service();
        let id = create(&mut svc);
        let _ = svc.update_submission(
            &id,
            SubmissionUpdateBuilder::new()
                .status(SubmissionStatus::Flagged)
                .assigned_reviewer(Some("Dr. Okafor".into()))
                .build(),
        );
        let sub = svc.submission(&id).unwrap();
        assert_eq!(sub.status, SubmissionStatus::Flagged);
        assert_eq!(sub.assigned_reviewer.as_deref(), Some("Dr. Okafor"));
        assert_eq!(sub.audit_log.len(), 2);
        assert_eq!(
            sub.audit_log.latest().map(|e| e.action.as_str()),
            Some("Status changed to \"flagged\"")
        );
    }

    #[test]
    fn unknown_submission_commands_are_not_found() {
        let mut svc = test_service();
        let before = svc.snapshot();
        assert_eq!(
            svc.set_status("sub-missing", SubmissionStatus::Verified),
            Outcome::NotFound
        );
        assert_eq!(
            svc.update_submission("sub-missing", SubmissionUpdate::default()),
            Outcome::NotFound
        );
        assert_eq!(svc.set_active_submission(Some("sub-missing")), Outcome::NotFound);
        assert_eq!(svc.snapshot(), before);
    }

    #[test]
    fn active_submission_can_be_cleared() {
        let mut svc = test_service();
        let _ = create(&mut svc);
        assert!(svc.set_active_submission(None).is_applied());
        assert!(svc.active_submission().is_none());
    }

    #[test]
    fn stats_count_every_status() {
        let mut svc = test_service();
        let a = create(&mut svc);
        let b = create(&mut svc);
        let _ = create(&mut svc);
        let _ = svc.set_status(&a, SubmissionStatus::Flagged);
        let _ = svc.set_status(&b, SubmissionStatus::InReview);
        assert_eq!(
            svc.submission_stats(),
            SubmissionStats {
                total: 3,
                pending: 1,
                in_review: 1,
                verified: 0,
                flagged: 1,
                rejected: 0,
            }
        );
    }
}
