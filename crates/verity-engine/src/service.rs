//! Service layer owning the journal state.
//!
//! `JournalService` holds the in-memory [`JournalState`] and the
//! [`StatePersistence`] it is saved through. All commands are implemented
//! as `impl JournalService` blocks under [`crate::commands`].

use std::sync::Arc;

use verity_config::{DEFAULT_STATE_KEY, VerityConfig};
use verity_core::entities::Submission;
use verity_core::state::{JournalSettings, JournalState};

use crate::outcome::Outcome;
use crate::store::{FileStore, KeyValueStore, MemoryStore, StatePersistence};

/// Sole mutator of the journal state.
///
/// Every command follows this protocol:
/// 1. Look up the target submission (unknown id: `Outcome::NotFound`, no change)
/// 2. Apply the mutation to the submission
/// 3. Prepend the command's audit entry to the submission's ledger
/// 4. Save the whole document before returning
#[derive(Debug)]
pub struct JournalService {
    state: JournalState,
    persistence: StatePersistence,
}

impl JournalService {
    /// Create a service over `store`, rehydrating the document stored under
    /// `key`. Without a usable stored document the state starts empty with
    /// `defaults` as its settings.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        defaults: JournalSettings,
    ) -> Self {
        let persistence = StatePersistence::new(store, key);
        let state = persistence.load().unwrap_or_else(|| {
            tracing::debug!(key = persistence.key(), "No stored journal state; using defaults");
            JournalState::with_settings(defaults)
        });
        Self { state, persistence }
    }

    /// An isolated service backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            DEFAULT_STATE_KEY,
            JournalSettings::default(),
        )
    }

    /// Create a service from loaded configuration, persisting under
    /// `store.state_dir`. If the directory cannot be created the service
    /// runs on an in-memory store.
    #[must_use]
    pub fn from_config(config: &VerityConfig) -> Self {
        let store: Arc<dyn KeyValueStore> = match FileStore::new(&config.store.state_dir) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::warn!(
                    dir = %config.store.state_dir.display(),
                    error = %e,
                    "Cannot open state directory; journal state will not survive restart"
                );
                Arc::new(MemoryStore::new())
            }
        };
        Self::new(
            store,
            config.store.state_key.clone(),
            config.journal.to_settings(),
        )
    }

    /// Borrow the current state.
    #[must_use]
    pub const fn state(&self) -> &JournalState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> JournalState {
        self.state.clone()
    }

    #[must_use]
    pub const fn settings(&self) -> &JournalSettings {
        &self.state.settings
    }

    #[must_use]
    pub fn submission(&self, id: &str) -> Option<&Submission> {
        self.state.submission(id)
    }

    /// The submission the reviewer currently has open, if it still exists.
    #[must_use]
    pub fn active_submission(&self) -> Option<&Submission> {
        self.state
            .active_submission_id
            .as_deref()
            .and_then(|id| self.state.submission(id))
    }

    /// Save the current state through the store. Failures are logged only.
    pub fn persist(&self) {
        self.persistence.save(&self.state);
    }

    pub(crate) const fn state_mut(&mut self) -> &mut JournalState {
        &mut self.state
    }

    /// Run `f` against submission `submission_id` and save if it applied.
    pub(crate) fn mutate<T>(
        &mut self,
        submission_id: &str,
        f: impl FnOnce(&mut Submission, &JournalSettings) -> Outcome<T>,
    ) -> Outcome<T> {
        let JournalState {
            submissions,
            settings,
            ..
        } = &mut self.state;
        let Some(submission) = submissions.iter_mut().find(|s| s.id == submission_id) else {
            tracing::debug!(submission_id, "Submission not found; command ignored");
            return Outcome::NotFound;
        };
        let outcome = f(submission, settings);
        if outcome.is_applied() {
            self.persist();
        }
        outcome
    }
}
