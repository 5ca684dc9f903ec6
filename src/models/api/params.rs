use crate::models::lighthouse::Strategy;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AnalyzeParams {
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize)]
pub struct StrategyParams {
    pub strategy: Strategy,
}
