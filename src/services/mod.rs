pub mod report_service;
pub mod site_audit_service;

pub use report_service::report_view;
pub use site_audit_service::{dispatch, PageSpeedClient, ReportFetcher, ReportPair};
