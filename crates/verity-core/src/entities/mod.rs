//! Entity structs for the Verity domain.
//!
//! The [`Submission`] is the root aggregate; it exclusively owns its analyses,
//! verification results, report, risk-of-bias assessment, and audit log.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` with
//! camelCase field names, matching the persisted journal document.

mod analysis;
mod assessment;
mod audit;
mod report;
mod submission;
mod verification;

pub use analysis::ReportedAnalysis;
pub use assessment::{RobAssessment, RobDomain};
pub use audit::{AuditEntry, AuditLog};
pub use report::{ReportSection, VerificationReport};
pub use submission::{Author, Submission, SubmissionDataset};
pub use verification::VerificationResult;
