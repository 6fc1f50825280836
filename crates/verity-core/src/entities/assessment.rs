use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DomainJudgment, RiskLevel, RobTool};
use crate::timestamp;

/// A single domain of a risk-of-bias instrument.
///
/// Signalling questions and supporting quotes are carried as an opaque payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RobDomain {
    pub id: String,
    pub name: String,
    pub judgment: DomainJudgment,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub questionnaire: serde_json::Value,
}

/// Risk-of-bias assessment attached to a submission. Replaced wholesale on save.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RobAssessment {
    pub id: String,
    pub tool: RobTool,
    #[serde(with = "timestamp::millis")]
    #[schemars(with = "String")]
    pub assessed_at: DateTime<Utc>,
    pub assessed_by: String,
    pub overall_risk: RiskLevel,
    #[serde(default)]
    pub domains: Vec<RobDomain>,
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub supporting_info: String,
}
