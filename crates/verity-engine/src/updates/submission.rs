//! Submission update builder.

use chrono::NaiveDate;
use serde::Serialize;
use verity_core::entities::{Author, Submission, SubmissionDataset};
use verity_core::enums::{Priority, SubmissionStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manuscript_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_reviewer: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Option<SubmissionDataset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_type: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubmissionStatus>,
}

impl SubmissionUpdate {
    /// Apply every field except `status`, which goes through the lifecycle
    /// transition so that it is audited.
    pub(crate) fn apply_fields(self, submission: &mut Submission) {
        if let Some(title) = self.title {
            submission.title = title;
        }
        if let Some(manuscript_id) = self.manuscript_id {
            submission.manuscript_id = manuscript_id;
        }
        if let Some(authors) = self.authors {
            submission.authors = authors;
        }
        if let Some(journal) = self.journal {
            submission.journal = journal;
        }
        if let Some(assigned_reviewer) = self.assigned_reviewer {
            submission.assigned_reviewer = assigned_reviewer;
        }
        if let Some(dataset) = self.dataset {
            submission.dataset = dataset;
        }
        if let Some(notes) = self.notes {
            submission.notes = notes;
        }
        if let Some(priority) = self.priority {
            submission.priority = priority;
        }
        if let Some(deadline) = self.deadline {
            submission.deadline = deadline;
        }
        if let Some(study_type) = self.study_type {
            submission.study_type = study_type;
        }
    }
}

pub struct SubmissionUpdateBuilder(SubmissionUpdate);

impl Default for SubmissionUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SubmissionUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn manuscript_id(mut self, manuscript_id: impl Into<String>) -> Self {
        self.0.manuscript_id = Some(manuscript_id.into());
        self
    }

    #[must_use]
    pub fn authors(mut self, authors: Vec<Author>) -> Self {
        self.0.authors = Some(authors);
        self
    }

    #[must_use]
    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.0.journal = Some(journal.into());
        self
    }

    #[must_use]
    pub fn assigned_reviewer(mut self, reviewer: Option<String>) -> Self {
        self.0.assigned_reviewer = Some(reviewer);
        self
    }

    #[must_use]
    pub fn dataset(mut self, dataset: Option<SubmissionDataset>) -> Self {
        self.0.dataset = Some(dataset);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.0.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.0.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn study_type(mut self, study_type: Option<String>) -> Self {
        self.0.study_type = Some(study_type);
        self
    }

    #[must_use]
    pub fn status(mut self, status: SubmissionStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> SubmissionUpdate {
        self.0
    }
}
