use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{MatchOutcome, Severity};
use crate::timestamp;

/// One reviewer's reproduction attempt for one reported analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub id: String,
    pub analysis_id: String,
    pub reproduced_results: String,
    #[serde(rename = "match")]
    pub match_outcome: MatchOutcome,
    pub discrepancy_details: String,
    pub severity: Severity,
    #[serde(with = "timestamp::millis")]
    #[schemars(with = "String")]
    pub reproduced_at: DateTime<Utc>,
    pub reproduced_by: String,
    #[serde(default)]
    pub notes: String,
}
