//! ID prefixes and generation.
//!
//! Every entity ID has the form `{prefix}-{8 hex chars}`, e.g. `sub-a3f8b2c1`.

use uuid::Uuid;

pub const PREFIX_SUBMISSION: &str = "sub";
pub const PREFIX_ANALYSIS: &str = "ana";
pub const PREFIX_RESULT: &str = "vrs";
pub const PREFIX_REPORT: &str = "rpt";
pub const PREFIX_AUDIT: &str = "aud";
pub const PREFIX_ASSESSMENT: &str = "rob";

/// Generate a fresh prefixed ID.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &random[..8])
}

/// Whether `id` carries the given prefix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|rest| !rest.is_empty())
}
