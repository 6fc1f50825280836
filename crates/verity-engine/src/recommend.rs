//! Reviewer-facing recommendations derived from the verdict.

use verity_core::entities::VerificationResult;
use verity_core::enums::Verdict;

use crate::aggregate::MatchTally;

pub const FULLY_VERIFIED: &str =
    "All analyses are independently reproducible. Recommend proceeding with peer review.";

pub const REQUEST_REPRODUCIBLE_SCRIPT: &str = "Consider requiring authors to share a reproducible analysis script (R, Stata, Python) as a supplementary file.";

pub const REQUEST_DATA_AND_CODE: &str = "Unable to reproduce the reported analyses. Recommend requesting complete analytical dataset and detailed analysis code.";

pub const CONSIDER_REJECTION: &str =
    "Consider rejecting the submission until reproducibility can be established.";

pub const INSUFFICIENT_INFORMATION: &str = "No verification results have been recorded. Insufficient information to assess reproducibility; record reproduction attempts for the reported analyses before deciding.";

/// Ordered recommendation lines for `verdict`, parameterized by result counts.
#[must_use]
pub fn generate_recommendations(verdict: Verdict, results: &[VerificationResult]) -> Vec<String> {
    let tally = MatchTally::from_results(results);
    match verdict {
        Verdict::FullyVerified => vec![FULLY_VERIFIED.to_string()],
        Verdict::PartiallyVerified => {
            let mut recs = Vec::with_capacity(2);
            if tally.minor > 0 {
                recs.push(format!(
                    "Minor numerical differences found in {} analysis(es) (likely due to rounding or software version differences). Recommend authors provide clarification.",
                    tally.minor
                ));
            }
            if tally.cannot_reproduce > 0 {
                recs.push(format!(
                    "Unable to reproduce {} analysis(es). Recommend requesting the authors' analysis code and complete analytical dataset.",
                    tally.cannot_reproduce
                ));
            }
            recs
        }
        Verdict::SignificantDiscrepancies => vec![
            format!(
                "Significant discrepancies detected in {} analysis(es). Recommend requesting authors' analysis code and re-verification before proceeding.",
                tally.major
            ),
            REQUEST_REPRODUCIBLE_SCRIPT.to_string(),
        ],
        Verdict::CannotVerify if results.is_empty() => vec![INSUFFICIENT_INFORMATION.to_string()],
        Verdict::CannotVerify => vec![
            REQUEST_DATA_AND_CODE.to_string(),
            CONSIDER_REJECTION.to_string(),
        ],
    }
}
