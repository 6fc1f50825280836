//! Lifecycle commands, one module per aggregate part.
//!
//! Each module adds an `impl JournalService` block.

mod analysis;
mod assessment;
mod audit;
mod report;
mod submission;
mod verification;

pub use analysis::AnalysisDraft;
pub use submission::{NewSubmission, SubmissionStats};
pub use verification::ResultDraft;
