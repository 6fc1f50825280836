use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AnalysisStatus, AnalysisType};

/// A statistical claim in the manuscript that reviewers check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportedAnalysis {
    pub id: String,
    #[serde(rename = "type")]
    pub analysis_type: AnalysisType,
    pub description: String,
    pub reported_results: String,
    pub table_or_figure_ref: String,
    pub page_number: Option<u32>,
    /// Derived from the matching verification result; never set directly.
    #[serde(default)]
    pub status: AnalysisStatus,
}
