use crate::models::lighthouse::Strategy;
use reqwest::Url;

pub const PAGESPEED_CATEGORIES: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

// Trimmed target, or None when there is nothing to analyze
pub fn normalize_target(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Builds the runPagespeed request for one strategy. The target is
/// percent-encoded the same way for every strategy.
pub fn build_pagespeed_url(
    endpoint: &Url,
    target: &str,
    api_key: Option<&str>,
    strategy: Strategy,
) -> Url {
    let mut url = endpoint.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("url", target);
        if let Some(key) = api_key {
            query.append_pair("key", key);
        }
        for category in PAGESPEED_CATEGORIES {
            query.append_pair("category", category);
        }
        query.append_pair("strategy", strategy.as_str());
    }
    url
}
