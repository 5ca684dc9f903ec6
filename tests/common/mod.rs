#![allow(dead_code)]

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pagespeed_pro::{api, models::AppState, services::PageSpeedClient, Config};
use reqwest::Url;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-key";

/// Stand-in for the runPagespeed endpoint that records every query it receives.
#[derive(Clone)]
pub struct FakePageSpeed {
    pub queries: Arc<Mutex<Vec<String>>>,
    pub desktop_status: StatusCode,
    /// How long each runPagespeed call takes to answer.
    pub delay: Duration,
}

impl FakePageSpeed {
    pub fn new(desktop_status: StatusCode) -> Self {
        FakePageSpeed {
            queries: Arc::new(Mutex::new(Vec::new())),
            desktop_status,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn request_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

pub fn query_pairs(raw: &str) -> Vec<(String, String)> {
    Url::parse(&format!("http://fake/?{raw}"))
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect()
}

pub fn query_value(raw: &str, key: &str) -> Option<String> {
    query_pairs(raw)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

async fn run_pagespeed(State(fake): State<FakePageSpeed>, RawQuery(query): RawQuery) -> Response {
    let raw = query.unwrap_or_default();
    let strategy = query_value(&raw, "strategy").unwrap_or_default();
    fake.queries.lock().unwrap().push(raw);
    if !fake.delay.is_zero() {
        tokio::time::sleep(fake.delay).await;
    }

    if strategy == "desktop" && fake.desktop_status != StatusCode::OK {
        return (fake.desktop_status, "backend error").into_response();
    }
    Json(report_body(&strategy)).into_response()
}

pub fn report_body(strategy: &str) -> Value {
    let performance = if strategy == "desktop" { 0.97 } else { 0.45 };
    let fcp = if strategy == "desktop" { "0.6 s" } else { "2.1 s" };
    let items: Vec<Value> = (0..7)
        .map(|i| json!({"url": format!("https://example.com/style-{i}.css"), "wastedBytes": 10240 + i}))
        .collect();

    json!({
        "lighthouseResult": {
            "categories": {
                "performance": {"score": performance},
                "accessibility": {"score": 0.88},
                "best-practices": {"score": 1},
                "seo": {"score": 0.5}
            },
            "audits": {
                "first-contentful-paint": {
                    "title": "First Contentful Paint",
                    "score": performance,
                    "displayValue": fcp
                },
                "render-blocking-resources": {
                    "title": "Eliminate render-blocking resources",
                    "description": "Resources are blocking the first paint of your page.",
                    "score": 0.3,
                    "displayValue": "Potential savings of 1,230 ms",
                    "details": {"type": "opportunity", "items": items}
                },
                "unused-css-rules": {"title": "Reduce unused CSS", "score": 1},
                "dom-size": {"title": "Avoids an excessive DOM size", "score": 1, "displayValue": "312 elements"},
                "color-contrast": {
                    "title": "Background and foreground colors have a sufficient contrast ratio",
                    "score": 1,
                    "scoreDisplayMode": "manual"
                },
                "image-alt": {"title": "Image elements have [alt] attributes", "score": 1},
                "is-on-https": {"title": "Uses HTTPS", "score": 1}
            }
        },
        "loadingExperience": {
            "metrics": {
                "LARGEST_CONTENTFUL_PAINT_MS": {"percentile": 2534},
                "FIRST_INPUT_DELAY_MS": {"percentile": 17},
                "CUMULATIVE_LAYOUT_SHIFT_SCORE": {"percentile": 5}
            }
        }
    })
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn spawn_fake_pagespeed(fake: FakePageSpeed) -> SocketAddr {
    let app = Router::new()
        .route("/runPagespeed", get(run_pagespeed))
        .with_state(fake);
    spawn(app).await
}

pub fn config_for(fake_addr: SocketAddr) -> Config {
    let vars: HashMap<String, String> = [
        ("PAGESPEED_API_KEY", TEST_API_KEY.to_string()),
        ("PAGESPEED_ENDPOINT", format!("http://{fake_addr}/runPagespeed")),
        ("BIND_ADDR", "127.0.0.1:0".to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    Config::from_vars(vars).unwrap()
}

/// Starts the service against a fresh fake endpoint and returns its base url.
pub async fn start_service(desktop_status: StatusCode) -> (String, FakePageSpeed) {
    start_service_with(FakePageSpeed::new(desktop_status)).await
}

pub async fn start_service_with(fake: FakePageSpeed) -> (String, FakePageSpeed) {
    let fake_addr = spawn_fake_pagespeed(fake.clone()).await;

    let config = config_for(fake_addr);
    let client = PageSpeedClient::new(&config).unwrap();
    let app = api::router(Arc::new(AppState::new(client, config.session_ttl)));
    let addr = spawn(app).await;

    (format!("http://{addr}"), fake)
}

pub async fn create_session(http: &reqwest::Client, base: &str) -> String {
    let response = http.post(format!("{base}/sessions")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

pub async fn analyze(http: &reqwest::Client, base: &str, id: &str, url: &str) -> Value {
    let response = http
        .post(format!("{base}/sessions/{id}/analyze"))
        .json(&json!({ "url": url }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.unwrap()
}
