use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AuditCategory;
use crate::metadata::{Metadata, MetadataValue};
use crate::timestamp;

/// An immutable audit trail entry recording one mutation of a submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: String,
    #[serde(with = "timestamp::millis")]
    #[schemars(with = "String")]
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub performed_by: String,
    pub details: String,
    pub category: AuditCategory,
    #[serde(default)]
    #[schemars(with = "BTreeMap<String, MetadataValue>")]
    pub metadata: Metadata,
}

/// Append-only, newest-first audit ledger of a submission.
///
/// The only mutator is [`AuditLog::append`], which places the new entry at
/// index 0. Existing entries are never reordered, edited, or removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct AuditLog(Vec<AuditEntry>);

impl AuditLog {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Prepend `entry` so it becomes the newest record.
    pub fn append(&mut self, entry: AuditEntry) {
        self.0.insert(0, entry);
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[AuditEntry] {
        &self.0
    }

    /// The most recently appended entry.
    #[must_use]
    pub fn latest(&self) -> Option<&AuditEntry> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuditEntry> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries recorded under `category`.
    #[must_use]
    pub fn count_by_category(&self, category: AuditCategory) -> usize {
        self.0.iter().filter(|e| e.category == category).count()
    }
}

impl<'a> IntoIterator for &'a AuditLog {
    type Item = &'a AuditEntry;
    type IntoIter = std::slice::Iter<'a, AuditEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
