use crate::models::views::tier::ScoreTier;
use serde::Serialize;

// One of the six lab timing metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetric {
    pub id: &'static str,
    pub title: &'static str,
    pub value: String,
    pub score: f64,
    pub tier: ScoreTier,
    pub description: &'static str,
}
