pub mod audit;
pub mod category;
pub mod field_data;
pub mod report;
pub mod strategy;

pub use audit::{Audit, DetailItem, OrderedAudits};
pub use category::{Categories, Category, CategoryScores};
pub use field_data::FieldData;
pub use report::{AnalysisReport, PageSpeedResponse};
pub use strategy::Strategy;
