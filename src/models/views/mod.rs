pub mod accessibility;
pub mod metric;
pub mod opportunity;
pub mod overview;
pub mod report_view;
pub mod tier;

pub use accessibility::{AccessibilityAudit, AccessibilityPartition};
pub use metric::KeyMetric;
pub use opportunity::{Diagnostic, Opportunity, ResourceItem, ResourceList};
pub use overview::{AuditSummary, CategoryScoreView, CoreWebVitals};
pub use report_view::ReportView;
pub use tier::{classify, ScoreTier};
