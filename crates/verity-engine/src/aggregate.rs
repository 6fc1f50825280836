//! Verification aggregation.
//!
//! Pure functions mapping per-analysis verification results to the derived
//! analysis status and the submission-level verdict.

use verity_core::entities::VerificationResult;
use verity_core::enums::{AnalysisStatus, MatchOutcome, Verdict};

/// Counts of results per match outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub exact: u32,
    pub minor: u32,
    pub major: u32,
    pub cannot_reproduce: u32,
}

impl MatchTally {
    #[must_use]
    pub fn from_results(results: &[VerificationResult]) -> Self {
        results.iter().fold(Self::default(), |mut tally, r| {
            match r.match_outcome {
                MatchOutcome::Exact => tally.exact += 1,
                MatchOutcome::MinorDiscrepancy => tally.minor += 1,
                MatchOutcome::MajorDiscrepancy => tally.major += 1,
                MatchOutcome::CannotReproduce => tally.cannot_reproduce += 1,
            }
            tally
        })
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.exact + self.minor + self.major + self.cannot_reproduce
    }

    /// Minor plus major discrepancies.
    #[must_use]
    pub const fn discrepant(&self) -> u32 {
        self.minor + self.major
    }

    /// Verdict for this tally. First matching rule wins.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.total() == 0 {
            return Verdict::CannotVerify;
        }
        // "and zero exact" is the tie-break: one exact match lifts the
        // submission out of cannot-verify.
        if self.cannot_reproduce > 0 && self.exact == 0 {
            return Verdict::CannotVerify;
        }
        if self.major > 0 {
            return Verdict::SignificantDiscrepancies;
        }
        if self.minor > 0 || self.cannot_reproduce > 0 {
            return Verdict::PartiallyVerified;
        }
        Verdict::FullyVerified
    }
}

/// Status of an analysis given its (possibly absent) verification result.
#[must_use]
pub const fn derive_analysis_status(result: Option<&VerificationResult>) -> AnalysisStatus {
    match result {
        None => AnalysisStatus::Pending,
        Some(r) => match r.match_outcome {
            MatchOutcome::Exact => AnalysisStatus::Verified,
            MatchOutcome::MinorDiscrepancy | MatchOutcome::MajorDiscrepancy => {
                AnalysisStatus::Discrepant
            }
            MatchOutcome::CannotReproduce => AnalysisStatus::CannotVerify,
        },
    }
}

/// Submission-level verdict. Depends only on the multiset of match outcomes.
#[must_use]
pub fn compute_verdict(results: &[VerificationResult]) -> Verdict {
    MatchTally::from_results(results).verdict()
}
