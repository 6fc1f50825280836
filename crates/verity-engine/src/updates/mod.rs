//! Patch types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are applied; `Option<Option<_>>` fields distinguish "leave as is"
//! from "clear". The serialized form lists the changed fields only and is
//! what the service logs.

pub mod analysis;
pub mod settings;
pub mod submission;

pub use analysis::{AnalysisUpdate, AnalysisUpdateBuilder};
pub use settings::{SettingsUpdate, SettingsUpdateBuilder};
pub use submission::{SubmissionUpdate, SubmissionUpdateBuilder};

/// Sorted names of the fields an update touches.
pub(crate) fn changed_fields<T: serde::Serialize>(update: &T) -> Vec<String> {
    let mut fields: Vec<String> = match serde_json::to_value(update) {
        Ok(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };
    fields.sort();
    fields
}
