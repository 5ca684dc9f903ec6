use crate::models::views::tier::ScoreTier;
use serde::Serialize;

/// An affected resource or element, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_kb: Option<u64>,
}

/// First few affected items of an audit plus how many were left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceList {
    pub items: Vec<ResourceItem>,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub display_value: Option<String>,
    pub score: f64,
    pub tier: ScoreTier,
    pub resources: ResourceList,
}

// diagnostics are shown whatever their score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub display_value: Option<String>,
    pub score: Option<f64>,
}
