// src/api/mod.rs

pub mod handler;

use crate::models::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use handler::{
    analyze_handler, create_session_handler, delete_session_handler, get_session_handler,
    health_handler, set_strategy_handler,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/sessions", post(create_session_handler))
        .route(
            "/sessions/{id}",
            get(get_session_handler).delete(delete_session_handler),
        )
        .route("/sessions/{id}/analyze", post(analyze_handler))
        .route("/sessions/{id}/strategy", put(set_strategy_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
