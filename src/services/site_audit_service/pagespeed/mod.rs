pub mod client;
pub mod dispatch;

pub use client::{PageSpeedClient, ReportFetcher};
pub use dispatch::{dispatch, ReportPair};
