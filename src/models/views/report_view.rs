use crate::models::lighthouse::Strategy;
use crate::models::views::{
    AccessibilityPartition, AuditSummary, CategoryScoreView, CoreWebVitals, Diagnostic, KeyMetric,
    Opportunity,
};
use serde::Serialize;

/// Every grouping derived from the report of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub strategy: Strategy,
    pub categories: Vec<CategoryScoreView>,
    pub core_web_vitals: Option<CoreWebVitals>,
    pub key_metrics: Vec<KeyMetric>,
    pub opportunities: Vec<Opportunity>,
    pub diagnostics: Vec<Diagnostic>,
    pub accessibility: AccessibilityPartition,
    pub passed_audits: Vec<AuditSummary>,
}
