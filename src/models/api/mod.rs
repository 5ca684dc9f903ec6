pub mod params;
pub mod responses;

pub use params::{AnalyzeParams, StrategyParams};
pub use responses::{HealthResponse, SessionSnapshot};
