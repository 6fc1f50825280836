//! Status enums, outcome classifications, and policy settings for Verity.
//!
//! All enums use kebab-case serialization via `#[serde(rename_all = "kebab-case")]`
//! so persisted documents and audit exports keep the labels reviewers see
//! (`in-review`, `minor-discrepancy`, `fully-verified`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

// ---------------------------------------------------------------------------
// SubmissionStatus
// ---------------------------------------------------------------------------

/// Review status of a submission.
///
/// ```text
/// pending, in-review, verified, flagged, rejected   (any → any)
/// ```
///
/// No state is terminal: a rejected submission can be re-opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStatus {
    Pending,
    InReview,
    Verified,
    Flagged,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::InReview,
        Self::Verified,
        Self::Flagged,
        Self::Rejected,
    ];

    /// Every status other than the current one is reachable.
    #[must_use]
    pub fn allowed_next_states(self) -> Vec<Self> {
        Self::ALL.into_iter().filter(|s| *s != self).collect()
    }

    /// A transition is any change of value; writing the same status is a no-op.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self != next
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InReview => "in-review",
            Self::Verified => "verified",
            Self::Flagged => "flagged",
            Self::Rejected => "rejected",
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Editorial priority of a submission.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisType
// ---------------------------------------------------------------------------

/// Statistical method of a reported analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisType {
    Table1,
    Regression,
    Survival,
    MetaAnalysis,
    Subgroup,
    Sensitivity,
    Psm,
    Descriptive,
    ForestPlot,
    Other,
}

impl AnalysisType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table1 => "table1",
            Self::Regression => "regression",
            Self::Survival => "survival",
            Self::MetaAnalysis => "meta-analysis",
            Self::Subgroup => "subgroup",
            Self::Sensitivity => "sensitivity",
            Self::Psm => "psm",
            Self::Descriptive => "descriptive",
            Self::ForestPlot => "forest-plot",
            Self::Other => "other",
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisStatus
// ---------------------------------------------------------------------------

/// Verification status of a single reported analysis.
///
/// Always derived from the analysis' verification result, never set directly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisStatus {
    #[default]
    Pending,
    Verified,
    Discrepant,
    CannotVerify,
}

impl AnalysisStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Discrepant => "discrepant",
            Self::CannotVerify => "cannot-verify",
        }
    }
}

// ---------------------------------------------------------------------------
// MatchOutcome
// ---------------------------------------------------------------------------

/// Comparison between reported and independently reproduced results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MatchOutcome {
    Exact,
    MinorDiscrepancy,
    MajorDiscrepancy,
    CannotReproduce,
}

impl MatchOutcome {
    pub const ALL: [Self; 4] = [
        Self::Exact,
        Self::MinorDiscrepancy,
        Self::MajorDiscrepancy,
        Self::CannotReproduce,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::MinorDiscrepancy => "minor-discrepancy",
            Self::MajorDiscrepancy => "major-discrepancy",
            Self::CannotReproduce => "cannot-reproduce",
        }
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Reviewer-assessed severity of a discrepancy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Critical,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Submission-level reproducibility classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    FullyVerified,
    PartiallyVerified,
    SignificantDiscrepancies,
    CannotVerify,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullyVerified => "fully-verified",
            Self::PartiallyVerified => "partially-verified",
            Self::SignificantDiscrepancies => "significant-discrepancies",
            Self::CannotVerify => "cannot-verify",
        }
    }

    /// Human-readable label used in audit actions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullyVerified => "Fully Verified",
            Self::PartiallyVerified => "Partially Verified",
            Self::SignificantDiscrepancies => "Significant Discrepancies",
            Self::CannotVerify => "Cannot Verify",
        }
    }
}

// ---------------------------------------------------------------------------
// SectionStatus
// ---------------------------------------------------------------------------

/// Status badge of a report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SectionStatus {
    Pass,
    Warning,
    Fail,
    Info,
}

impl SectionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Fail => "fail",
            Self::Info => "info",
        }
    }
}

// ---------------------------------------------------------------------------
// AuditCategory
// ---------------------------------------------------------------------------

/// Kind of mutation an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AuditCategory {
    Submission,
    Verification,
    Assessment,
    Report,
    System,
}

impl AuditCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::Verification => "verification",
            Self::Assessment => "assessment",
            Self::Report => "report",
            Self::System => "system",
        }
    }
}

// ---------------------------------------------------------------------------
// AutoFlagThreshold
// ---------------------------------------------------------------------------

/// Journal policy deciding which results force a submission to `flagged`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AutoFlagThreshold {
    AnyDiscrepancy,
    #[default]
    MajorOnly,
    CriticalOnly,
}

impl AutoFlagThreshold {
    pub const ALL: [Self; 3] = [Self::AnyDiscrepancy, Self::MajorOnly, Self::CriticalOnly];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnyDiscrepancy => "any-discrepancy",
            Self::MajorOnly => "major-only",
            Self::CriticalOnly => "critical-only",
        }
    }
}

// ---------------------------------------------------------------------------
// RobTool / RiskLevel / DomainJudgment
// ---------------------------------------------------------------------------

/// Risk-of-bias instrument used for an assessment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum RobTool {
    #[default]
    Rob2,
    RobinsI,
    NewcastleOttawa,
    Custom,
}

impl RobTool {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rob2 => "rob2",
            Self::RobinsI => "robins-i",
            Self::NewcastleOttawa => "newcastle-ottawa",
            Self::Custom => "custom",
        }
    }
}

/// Overall risk of bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    SomeConcerns,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::SomeConcerns => "some-concerns",
            Self::High => "high",
        }
    }
}

/// Judgment for a single risk-of-bias domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DomainJudgment {
    Low,
    SomeConcerns,
    High,
    NotApplicable,
}

impl DomainJudgment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::SomeConcerns => "some-concerns",
            Self::High => "high",
            Self::NotApplicable => "not-applicable",
        }
    }
}

display_as_str!(
    SubmissionStatus,
    Priority,
    AnalysisType,
    AnalysisStatus,
    MatchOutcome,
    Severity,
    Verdict,
    SectionStatus,
    AuditCategory,
    AutoFlagThreshold,
    RobTool,
    RiskLevel,
    DomainJudgment,
);
