//! Reported analysis update builder.
//!
//! There is deliberately no `status` field: an analysis' status is derived
//! from its verification result.

use serde::Serialize;
use verity_core::entities::ReportedAnalysis;
use verity_core::enums::AnalysisType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<AnalysisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_or_figure_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<Option<u32>>,
}

impl AnalysisUpdate {
    pub(crate) fn apply(self, analysis: &mut ReportedAnalysis) {
        if let Some(analysis_type) = self.analysis_type {
            analysis.analysis_type = analysis_type;
        }
        if let Some(description) = self.description {
            analysis.description = description;
        }
        if let Some(reported_results) = self.reported_results {
            analysis.reported_results = reported_results;
        }
        if let Some(table_or_figure_ref) = self.table_or_figure_ref {
            analysis.table_or_figure_ref = table_or_figure_ref;
        }
        if let Some(page_number) = self.page_number {
            analysis.page_number = page_number;
        }
    }
}

pub struct AnalysisUpdateBuilder(AnalysisUpdate);

impl Default for AnalysisUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AnalysisUpdate::default())
    }

    #[must_use]
    pub fn analysis_type(mut self, analysis_type: AnalysisType) -> Self {
        self.0.analysis_type = Some(analysis_type);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn reported_results(mut self, reported_results: impl Into<String>) -> Self {
        self.0.reported_results = Some(reported_results.into());
        self
    }

    #[must_use]
    pub fn table_or_figure_ref(mut self, reference: impl Into<String>) -> Self {
        self.0.table_or_figure_ref = Some(reference.into());
        self
    }

    #[must_use]
    pub fn page_number(mut self, page_number: Option<u32>) -> Self {
        self.0.page_number = Some(page_number);
        self
    }

    #[must_use]
    pub fn build(self) -> AnalysisUpdate {
        self.0
    }
}
