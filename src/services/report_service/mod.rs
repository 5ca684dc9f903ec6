// src/services/report_service/mod.rs

pub mod constants;
pub mod extract;

pub use crate::models::views::classify;
pub use extract::{
    accessibility, category_overview, core_web_vitals, diagnostics, key_metrics, opportunities,
    passed_audits, report_view,
};
