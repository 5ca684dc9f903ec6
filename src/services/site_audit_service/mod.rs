// src/services/site_audit_service/mod.rs

pub mod pagespeed;

pub use pagespeed::{dispatch, PageSpeedClient, ReportFetcher, ReportPair};
