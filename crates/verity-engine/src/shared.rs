//! Lock-guarded handle for concurrent callers.

use std::any::Any;
use std::sync::Arc;

use tokio::sync::Mutex;
use verity_core::entities::{Submission, VerificationReport};
use verity_core::enums::SubmissionStatus;
use verity_core::state::JournalState;

use crate::commands::{AnalysisDraft, NewSubmission, ResultDraft};
use crate::export::{AuditExport, ExportFormat};
use crate::outcome::Outcome;
use crate::service::JournalService;

/// Cloneable handle to one [`JournalService`].
///
/// Every call holds the lock for the whole command, so a mutation, its
/// audit entry and the save are never interleaved with another command.
/// Commands run on the blocking pool because the save may touch the disk.
/// Reads return owned snapshots.
#[derive(Debug, Clone)]
pub struct SharedJournal {
    inner: Arc<Mutex<JournalService>>,
}

impl SharedJournal {
    #[must_use]
    pub fn new(service: JournalService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// Run `f` with exclusive access to the service.
    ///
    /// The lock is held until `f` returns, even if the caller stops
    /// awaiting. A panic in `f` is resumed on the caller.
    pub async fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut JournalService) -> R + Send + 'static,
        R: Send + 'static,
    {
        let mut service = Arc::clone(&self.inner).lock_owned().await;
        match tokio::task::spawn_blocking(move || f(&mut service)).await {
            Ok(value) => value,
            Err(e) => std::panic::resume_unwind(
                e.try_into_panic()
                    .unwrap_or_else(|e| Box::new(e.to_string()) as Box<dyn Any + Send>),
            ),
        }
    }

    pub async fn snapshot(&self) -> JournalState {
        self.inner.lock().await.snapshot()
    }

    pub async fn submission(&self, submission_id: &str) -> Option<Submission> {
        self.inner.lock().await.submission(submission_id).cloned()
    }

    pub async fn create_submission(&self, new: NewSubmission) -> String {
        self.with(move |svc| svc.create_submission(new)).await
    }

    pub async fn set_status(&self, submission_id: &str, status: SubmissionStatus) -> Outcome<bool> {
        let submission_id = submission_id.to_string();
        self.with(move |svc| svc.set_status(&submission_id, status))
            .await
    }

    pub async fn add_reported_analysis(
        &self,
        submission_id: &str,
        draft: AnalysisDraft,
    ) -> Outcome<String> {
        let submission_id = submission_id.to_string();
        self.with(move |svc| svc.add_reported_analysis(&submission_id, draft))
            .await
    }

    pub async fn add_verification_result(
        &self,
        submission_id: &str,
        draft: ResultDraft,
    ) -> Outcome<String> {
        let submission_id = submission_id.to_string();
        self.with(move |svc| svc.add_verification_result(&submission_id, draft))
            .await
    }

    pub async fn generate_verification_report(
        &self,
        submission_id: &str,
    ) -> Outcome<VerificationReport> {
        let submission_id = submission_id.to_string();
        self.with(move |svc| svc.generate_verification_report(&submission_id))
            .await
    }

    pub async fn export_audit_log(
        &self,
        submission_id: &str,
        format: ExportFormat,
    ) -> Option<AuditExport> {
        self.inner
            .lock()
            .await
            .export_audit_log(submission_id, format)
    }
}

impl From<JournalService> for SharedJournal {
    fn from(service: JournalService) -> Self {
        Self::new(service)
    }
}
