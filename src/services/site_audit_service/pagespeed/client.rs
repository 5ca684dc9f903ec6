use crate::config::Config;
use crate::error::AnalysisError;
use crate::models::lighthouse::{AnalysisReport, Strategy};
use crate::utils::build_pagespeed_url;
use log::{debug, info};
use reqwest::{Client, Url};
use std::future::Future;

/// Source of one analysis report per strategy.
pub trait ReportFetcher {
    fn fetch(
        &self,
        target: &str,
        strategy: Strategy,
    ) -> impl Future<Output = Result<AnalysisReport, AnalysisError>> + Send;
}

/// Calls the PageSpeed Insights runPagespeed endpoint.
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    http: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl PageSpeedClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(PageSpeedClient {
            http: builder.build()?,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn request_url(&self, target: &str, strategy: Strategy) -> Url {
        build_pagespeed_url(&self.endpoint, target, self.api_key.as_deref(), strategy)
    }
}

impl ReportFetcher for PageSpeedClient {
    async fn fetch(&self, target: &str, strategy: Strategy) -> Result<AnalysisReport, AnalysisError> {
        let url = self.request_url(target, strategy);
        debug!("GET {} ({})", self.endpoint, strategy);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| AnalysisError::Transport { strategy, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status { strategy, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| AnalysisError::Transport { strategy, source })?;

        let report = AnalysisReport::from_slice(&body)
            .map_err(|source| AnalysisError::Decode { strategy, source })?;

        info!(
            "Received {} report for {} with {} audits",
            strategy,
            target,
            report.audits.len()
        );
        Ok(report)
    }
}
