//! Risk-of-bias assessment command.

use verity_core::entities::RobAssessment;
use verity_core::ids::{PREFIX_ASSESSMENT, generate_id};
use verity_core::timestamp;

use crate::ledger;
use crate::outcome::Outcome;
use crate::service::JournalService;

impl JournalService {
    /// Replace the submission's risk-of-bias assessment wholesale and append
    /// one `assessment` entry. Domain questionnaires are stored as given.
    pub fn set_rob_assessment(
        &mut self,
        submission_id: &str,
        mut assessment: RobAssessment,
    ) -> Outcome<()> {
        self.mutate(submission_id, |submission, _| {
            if assessment.id.is_empty() {
                assessment.id = generate_id(PREFIX_ASSESSMENT);
            }
            assessment.assessed_at = timestamp::truncate(assessment.assessed_at);
            let entry = ledger::assessment_saved(&assessment).stamp(timestamp::now());
            tracing::debug!(
                submission_id,
                tool = %assessment.tool,
                overall_risk = %assessment.overall_risk,
                "Risk of bias assessment saved"
            );
            submission.risk_of_bias_assessment = Some(assessment);
            submission.audit_log.append(entry);
            Outcome::Applied(())
        })
    }
}
