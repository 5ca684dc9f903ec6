use crate::models::lighthouse::audit::{Audit, OrderedAudits};
use crate::models::lighthouse::category::{Categories, CategoryScores};
use crate::models::lighthouse::field_data::{FieldData, LoadingExperience};
use serde::Deserialize;

// Root body returned by runPagespeed
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct PageSpeedResponse {
    pub lighthouseResult: LighthouseResult,
    #[serde(default)]
    pub loadingExperience: Option<LoadingExperience>,
}

// Either section may be absent or null
#[derive(Debug, Deserialize)]
pub struct LighthouseResult {
    #[serde(default)]
    pub categories: Option<Categories>,
    #[serde(default)]
    pub audits: Option<OrderedAudits>,
}

/// The analysis of one page for one device strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    pub category_scores: CategoryScores,
    pub audits: OrderedAudits,
    pub field_data: Option<FieldData>,
}

impl AnalysisReport {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<PageSpeedResponse>(bytes).map(Self::from)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<PageSpeedResponse>(value).map(Self::from)
    }

    pub fn audit(&self, id: &str) -> Option<&Audit> {
        self.audits.get(id)
    }
}

impl From<PageSpeedResponse> for AnalysisReport {
    fn from(response: PageSpeedResponse) -> Self {
        AnalysisReport {
            category_scores: response
                .lighthouseResult
                .categories
                .unwrap_or_default()
                .into(),
            audits: response.lighthouseResult.audits.unwrap_or_default(),
            field_data: response
                .loadingExperience
                .and_then(FieldData::from_loading_experience),
        }
    }
}
