//! Verification report assembly.
//!
//! A report is recomputed from scratch on every generation call from the
//! submission's current verification results, dataset reference and
//! risk-of-bias assessment.

use chrono::{DateTime, Utc};
use verity_core::entities::{ReportSection, Submission, VerificationReport};
use verity_core::enums::{RiskLevel, SectionStatus, Verdict};

use crate::aggregate::MatchTally;
use crate::recommend::generate_recommendations;

pub const SECTION_DATASET: &str = "Dataset Verification";
pub const SECTION_ANALYSES: &str = "Analysis Verification Summary";
pub const SECTION_RISK_OF_BIAS: &str = "Risk of Bias Assessment";

/// Build the report for `submission` without touching it.
#[must_use]
pub fn assemble_report(
    submission: &Submission,
    id: String,
    generated_at: DateTime<Utc>,
) -> VerificationReport {
    let results = &submission.verification_results;
    let tally = MatchTally::from_results(results);
    let verdict = tally.verdict();

    VerificationReport {
        id,
        generated_at,
        overall_verdict: verdict,
        summary: summary(verdict, &tally, submission.reported_analyses.len()),
        total_analyses: count(submission.reported_analyses.len()),
        verified: tally.exact,
        discrepant: tally.discrepant(),
        cannot_verify: tally.cannot_reproduce,
        recommendations: generate_recommendations(verdict, results),
        sections: vec![
            dataset_section(submission),
            analysis_section(verdict, &tally, submission.reported_analyses.len()),
            risk_of_bias_section(submission),
        ],
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn summary(verdict: Verdict, tally: &MatchTally, analyses: usize) -> String {
    match verdict {
        Verdict::FullyVerified => format!(
            "All {} reported analyses were independently reproduced with exact matching results. The manuscript's statistical analyses are fully reproducible.",
            tally.total()
        ),
        Verdict::PartiallyVerified => format!(
            "{} of {analyses} analyses were exactly reproduced. Minor discrepancies or reproducibility issues were identified in the remaining analyses.",
            tally.exact
        ),
        Verdict::SignificantDiscrepancies => format!(
            "Significant discrepancies were found in {} analyses. The reported results do not match the independently reproduced results and require author response.",
            tally.major
        ),
        Verdict::CannotVerify => "Independent verification could not be completed for the reported analyses. Insufficient information or missing data prevented reproduction.".to_string(),
    }
}

fn dataset_section(submission: &Submission) -> ReportSection {
    match &submission.dataset {
        Some(ds) => ReportSection {
            title: SECTION_DATASET.to_string(),
            content: format!(
                "Dataset: {} ({} rows × {} columns)",
                ds.file_name, ds.row_count, ds.column_count
            ),
            status: if ds.integrity_verified {
                SectionStatus::Pass
            } else {
                SectionStatus::Warning
            },
            details: format!(
                "SHA-256: {}. Integrity: {}.",
                ds.sha256_hash,
                if ds.integrity_verified {
                    "Verified"
                } else {
                    "Not verified"
                }
            ),
        },
        None => ReportSection {
            title: SECTION_DATASET.to_string(),
            content: "No dataset provided.".to_string(),
            status: SectionStatus::Fail,
            details: "Dataset was not submitted for verification.".to_string(),
        },
    }
}

fn analysis_section(verdict: Verdict, tally: &MatchTally, analyses: usize) -> ReportSection {
    ReportSection {
        title: SECTION_ANALYSES.to_string(),
        content: format!(
            "{} of {analyses} reported analyses independently verified.",
            tally.total()
        ),
        status: match verdict {
            Verdict::FullyVerified => SectionStatus::Pass,
            Verdict::PartiallyVerified => SectionStatus::Warning,
            Verdict::SignificantDiscrepancies | Verdict::CannotVerify => SectionStatus::Fail,
        },
        details: format!(
            "Exact matches: {}. Minor discrepancies: {}. Major discrepancies: {}. Cannot reproduce: {}.",
            tally.exact, tally.minor, tally.major, tally.cannot_reproduce
        ),
    }
}

fn risk_of_bias_section(submission: &Submission) -> ReportSection {
    match &submission.risk_of_bias_assessment {
        Some(rob) => ReportSection {
            title: SECTION_RISK_OF_BIAS.to_string(),
            content: format!(
                "Tool: {}. Overall risk: {}.",
                rob.tool.as_str().to_uppercase(),
                rob.overall_risk
            ),
            status: match rob.overall_risk {
                RiskLevel::Low => SectionStatus::Pass,
                RiskLevel::SomeConcerns => SectionStatus::Warning,
                RiskLevel::High => SectionStatus::Fail,
            },
            details: rob.justification.clone(),
        },
        None => ReportSection {
            title: SECTION_RISK_OF_BIAS.to_string(),
            content: "Risk of bias assessment not completed.".to_string(),
            status: SectionStatus::Info,
            details: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{
        analysis, at, blank_submission, dataset, result_with, rob_assessment,
    };
    use pretty_assertions::assert_eq;
    use verity_core::enums::{MatchOutcome, RobTool, Severity};

    fn build(sub: &Submission) -> VerificationReport {
        assemble_report(sub, "rpt-00000001".into(), at(12, 0))
    }

    #[test]
    fn empty_submission_report() {
        let report = build(&blank_submission());
        assert_eq!(report.overall_verdict, Verdict::CannotVerify);
        assert_eq!(report.total_analyses, 0);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(
            report
                .sections
                .iter()
                .map(|s| (s.title.as_str(), s.status))
                .collect::<Vec<_>>(),
            vec![
                (SECTION_DATASET, SectionStatus::Fail),
                (SECTION_ANALYSES, SectionStatus::Fail),
                (SECTION_RISK_OF_BIAS, SectionStatus::Info),
            ]
        );
        let analyses = report.section(SECTION_ANALYSES).unwrap();
        assert_eq!(analyses.content, "0 of 0 reported analyses independently verified.");
        assert_eq!(
            analyses.details,
            "Exact matches: 0. Minor discrepancies: 0. Major discrepancies: 0. Cannot reproduce: 0."
        );
    }

    #[test]
    fn counts_come_from_results_not_analyses() {
        let mut sub = blank_submission();
        sub.reported_analyses = (0..4).map(|i| analysis(&format!("ana-{i:08}"))).collect();
        sub.verification_results = vec![
            result_with("ana-00000000", MatchOutcome::Exact, Severity::None),
            result_with("ana-00000001", MatchOutcome::MinorDiscrepancy, Severity::Low),
            result_with("ana-00000002", MatchOutcome::CannotReproduce, Severity::None),
        ];
        let report = build(&sub);
        assert_eq!(report.overall_verdict, Verdict::PartiallyVerified);
        assert_eq!(report.total_analyses, 4);
        assert_eq!(report.verified, 1);
        assert_eq!(report.discrepant, 1);
        assert_eq!(report.cannot_verify, 1);
        assert_eq!(
            report.summary,
            "1 of 4 analyses were exactly reproduced. Minor discrepancies or reproducibility issues were identified in the remaining analyses."
        );
        let section = report.section(SECTION_ANALYSES).unwrap();
        assert_eq!(section.content, "3 of 4 reported analyses independently verified.");
        assert_eq!(section.status, SectionStatus::Warning);
    }

    #[test]
    fn dataset_section_statuses() {
        let mut sub = blank_submission();
        sub.dataset = Some(dataset(true));
        let section = build(&sub).section(SECTION_DATASET).cloned().unwrap();
        assert_eq!(section.status, SectionStatus::Pass);
        assert_eq!(section.content, "Dataset: cohort.csv (1200 rows × 48 columns)");
        assert_eq!(section.details, "SHA-256: 9f86d081884c7d65. Integrity: Verified.");

        sub.dataset = Some(dataset(false));
        let section = build(&sub).section(SECTION_DATASET).cloned().unwrap();
        assert_eq!(section.status, SectionStatus::Warning);
        assert_eq!(section.details, "SHA-256: 9f86d081884c7d65. Integrity: Not verified.");
    }

    #[test]
    fn risk_of_bias_section_follows_overall_risk() {
        let mut sub = blank_submission();
        for (risk, expected) in [
            (RiskLevel::Low, SectionStatus::Pass),
            (RiskLevel::SomeConcerns, SectionStatus::Warning),
            (RiskLevel::High, SectionStatus::Fail),
        ] {
            sub.risk_of_bias_assessment = Some(rob_assessment(RobTool::RobinsI, risk));
            let section = build(&sub).section(SECTION_RISK_OF_BIAS).cloned().unwrap();
            assert_eq!(section.status, expected, "{risk}");
            assert_eq!(
                section.content,
                format!("Tool: ROBINS-I. Overall risk: {risk}.")
            );
            assert_eq!(section.details, "Observational design");
        }
    }

    #[test]
    fn fully_verified_summary_and_section() {
        let mut sub = blank_submission();
        sub.reported_analyses = vec![analysis("ana-00000001"), analysis("ana-00000002")];
        sub.verification_results = vec![
            result_with("ana-00000001", MatchOutcome::Exact, Severity::None),
            result_with("ana-00000002", MatchOutcome::Exact, Severity::None),
        ];
        let report = build(&sub);
        assert_eq!(report.overall_verdict, Verdict::FullyVerified);
        assert_eq!(
            report.summary,
            "All 2 reported analyses were independently reproduced with exact matching results. The manuscript's statistical analyses are fully reproducible."
        );
        assert_eq!(
            report.section(SECTION_ANALYSES).map(|s| s.status),
            Some(SectionStatus::Pass)
        );
    }

    #[test]
    fn significant_discrepancies_summary() {
        let mut sub = blank_submission();
        sub.reported_analyses = vec![analysis("ana-00000001")];
        sub.verification_results = vec![result_with(
            "ana-00000001",
            MatchOutcome::MajorDiscrepancy,
            Severity::High,
        )];
        let report = build(&sub);
        assert_eq!(
            report.summary,
            "Significant discrepancies were found in 1 analyses. The reported results do not match the independently reproduced results and require author response."
        );
        assert_eq!(report.discrepant, 1);
    }
}
