use anyhow::Context;
use log::{info, warn};
use pagespeed_pro::{api, models::AppState, services::PageSpeedClient, Config};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // initialize tracing, `log` records are bridged into it
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    if config.api_key.is_none() {
        warn!("PAGESPEED_API_KEY is not set, requests will use the anonymous quota");
    }

    let client = PageSpeedClient::new(&config).context("failed to build HTTP client")?;
    let shared_state = Arc::new(AppState::new(client, config.session_ttl));
    shared_state.clone().spawn_session_sweeper(config.sweep_period());
    let app = api::router(shared_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🚀 Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
