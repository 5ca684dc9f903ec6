use crate::models::views::opportunity::ResourceList;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityAudit {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<ResourceList>,
}

/// Allow-listed accessibility audits split into disjoint buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccessibilityPartition {
    pub passed: Vec<AccessibilityAudit>,
    pub failed: Vec<AccessibilityAudit>,
    pub manual: Vec<AccessibilityAudit>,
}
