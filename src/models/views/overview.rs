use crate::models::views::tier::ScoreTier;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditSummary {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScoreView {
    pub id: &'static str,
    pub title: &'static str,
    pub percent: u32,
    pub tier: ScoreTier,
}

// Core Web Vitals from real-user field data, formatted for display
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoreWebVitals {
    pub largest_contentful_paint: Option<String>,
    pub first_input_delay: Option<String>,
    pub cumulative_layout_shift: Option<String>,
}
