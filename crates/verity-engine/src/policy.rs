//! Auto-flag / auto-verify policy.
//!
//! Runs on report generation only. The rules form an if/else-if chain, so at
//! most one branch applies even when several conditions hold.

use verity_core::entities::VerificationResult;
use verity_core::enums::{AutoFlagThreshold, MatchOutcome, Severity, SubmissionStatus, Verdict};

/// Status the submission should hold after a report with `verdict` is generated.
#[must_use]
pub fn next_status(
    current: SubmissionStatus,
    results: &[VerificationResult],
    verdict: Verdict,
    threshold: AutoFlagThreshold,
) -> SubmissionStatus {
    if threshold == AutoFlagThreshold::AnyDiscrepancy
        && results.iter().any(|r| r.match_outcome != MatchOutcome::Exact)
    {
        SubmissionStatus::Flagged
    } else if threshold == AutoFlagThreshold::MajorOnly
        && results
            .iter()
            .any(|r| r.match_outcome == MatchOutcome::MajorDiscrepancy)
    {
        SubmissionStatus::Flagged
    } else if threshold == AutoFlagThreshold::CriticalOnly
        && results.iter().any(|r| r.severity == Severity::Critical)
    {
        SubmissionStatus::Flagged
    } else if verdict == Verdict::FullyVerified {
        SubmissionStatus::Verified
    } else {
        current
    }
}
