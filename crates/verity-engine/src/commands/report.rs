//! Report generation command.

use verity_core::entities::VerificationReport;
use verity_core::ids::{PREFIX_REPORT, generate_id};
use verity_core::timestamp;

use super::submission::transition;
use crate::ledger;
use crate::outcome::Outcome;
use crate::policy::next_status;
use crate::report::assemble_report;
use crate::service::JournalService;

impl JournalService {
    /// Regenerate the submission's verification report and apply the
    /// auto-flag policy.
    ///
    /// Overwrites the previous report, appends one `report` entry and, when
    /// the policy changes the status, a `submission` entry after it.
    pub fn generate_verification_report(
        &mut self,
        submission_id: &str,
    ) -> Outcome<VerificationReport> {
        self.mutate(submission_id, |submission, settings| {
            let now = timestamp::now();
            let report = assemble_report(submission, generate_id(PREFIX_REPORT), now);
            let verdict = report.overall_verdict;
            let performer = settings.reviewer_or_default();

            submission.audit_log.append(
                ledger::report_generated(
                    verdict,
                    submission.verification_results.len(),
                    report.total_analyses,
                    performer,
                )
                .stamp(now),
            );
            submission.verification_report = Some(report.clone());

            let old = submission.status;
            let next = next_status(
                old,
                &submission.verification_results,
                verdict,
                settings.auto_flag_threshold,
            );
            if transition(submission, next, performer, true, now) {
                tracing::info!(
                    submission_id,
                    %verdict,
                    threshold = %settings.auto_flag_threshold,
                    %old,
                    new = %next,
                    "Status changed by report policy"
                );
            }

            tracing::debug!(submission_id, report_id = %report.id, %verdict, "Verification report generated");
            Outcome::Applied(report)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{AnalysisDraft, NewSubmission, ResultDraft};
    use crate::test_support::helpers::test_service;
    use crate::updates::SettingsUpdateBuilder;
    use pretty_assertions::assert_eq;
    use verity_core::enums::{
        AnalysisType, AuditCategory, AutoFlagThreshold, MatchOutcome, Severity, SubmissionStatus,
        Verdict,
    };
    use verity_core::metadata::MetadataValue;

    fn with_results(
        svc: &mut JournalService,
        results: &[(MatchOutcome, Severity)],
    ) -> String {
        let sub_id = svc.create_submission(NewSubmission::default());
        for (m, s) in results {
            let ana_id = svc
                .add_reported_analysis(&sub_id, AnalysisDraft::new(AnalysisType::Regression, "x"))
                .applied()
                .unwrap();
            let _ = svc.add_verification_result(&sub_id, ResultDraft::new(&ana_id, *m, *s, "A"));
        }
        sub_id
    }

    #[test]
    fn report_without_status_change_appends_one_entry() {
        let mut svc = test_service();
        let sub_id = with_results(&mut svc, &[(MatchOutcome::MinorDiscrepancy, Severity::Low)]);
        let before = svc.submission(&sub_id).unwrap().audit_log.len();
        let report = svc.generate_verification_report(&sub_id).applied().unwrap();
        assert_eq!(report.overall_verdict, Verdict::PartiallyVerified);
        let sub = svc.submission(&sub_id).unwrap();
        assert_eq!(sub.status, SubmissionStatus::Pending);
        assert_eq!(sub.audit_log.len(), before + 1);
        assert_eq!(sub.audit_log.latest().unwrap().category, AuditCategory::Report);
        assert_eq!(sub.verification_report.as_ref(), Some(&report));
    }

    #[test]
    fn auto_flag_appends_report_then_submission_entry() {
        let mut svc = test_service();
        svc.update_settings(
            SettingsUpdateBuilder::new()
                .auto_flag_threshold(AutoFlagThreshold::AnyDiscrepancy)
                .build(),
        );
        let sub_id = with_results(&mut svc, &[(MatchOutcome::MajorDiscrepancy, Severity::High)]);
        let before = svc.submission(&sub_id).unwrap().audit_log.len();
        let _ = svc.generate_verification_report(&sub_id);
        let sub = svc.submission(&sub_id).unwrap();
        assert_eq!(sub.status, SubmissionStatus::Flagged);
        let entries = sub.audit_log.entries();
        assert_eq!(entries.len(), before + 2);
        assert_eq!(entries[0].category, AuditCategory::Submission);
        assert_eq!(entries[1].category, AuditCategory::Report);
        assert_eq!(
            entries[0].metadata.get("trigger").and_then(MetadataValue::as_text),
            Some("report")
        );
    }

    #[test]
    fn regeneration_overwrites_report() {
        let mut svc = test_service();
        let sub_id = with_results(&mut svc, &[(MatchOutcome::Exact, Severity::None)]);
        let first = svc.generate_verification_report(&sub_id).applied().unwrap();
        let second = svc.generate_verification_report(&sub_id).applied().unwrap();
        assert_ne!(first.id, second.id);
        let sub = svc.submission(&sub_id).unwrap();
        assert_eq!(sub.verification_report.as_ref().map(|r| r.id.as_str()), Some(second.id.as_str()));
        // Second run: already verified, so only the report entry is added.
        assert_eq!(sub.audit_log.count_by_category(AuditCategory::Report), 2);
        assert_eq!(sub.audit_log.latest().unwrap().category, AuditCategory::Report);
    }

    #[test]
    fn unknown_submission_is_not_found() {
        let mut svc = test_service();
        assert_eq!(svc.generate_verification_report("sub-missing"), Outcome::NotFound);
    }
}
