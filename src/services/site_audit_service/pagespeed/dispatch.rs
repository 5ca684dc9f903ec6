use crate::error::AnalysisError;
use crate::models::lighthouse::{AnalysisReport, Strategy};
use crate::services::site_audit_service::pagespeed::client::ReportFetcher;
use log::{info, warn};

/// Mobile and desktop reports from one analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPair {
    pub mobile: AnalysisReport,
    pub desktop: AnalysisReport,
}

impl ReportPair {
    pub fn get(&self, strategy: Strategy) -> &AnalysisReport {
        match strategy {
            Strategy::Mobile => &self.mobile,
            Strategy::Desktop => &self.desktop,
        }
    }
}

/// Runs the mobile and desktop analyses concurrently. Either both reports
/// come back or the first error does; there is no retry.
pub async fn dispatch<F: ReportFetcher>(
    fetcher: &F,
    target: &str,
) -> Result<ReportPair, AnalysisError> {
    info!("Analyzing {} for mobile and desktop", target);

    let result = futures::try_join!(
        fetcher.fetch(target, Strategy::Mobile),
        fetcher.fetch(target, Strategy::Desktop),
    );

    match result {
        Ok((mobile, desktop)) => {
            info!("Analysis of {} completed", target);
            Ok(ReportPair { mobile, desktop })
        }
        Err(e) => {
            warn!("Analysis of {} failed: {}", target, e);
            Err(e)
        }
    }
}
