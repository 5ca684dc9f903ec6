use crate::models::api::HealthResponse;
use axum::Json;
use chrono::Utc;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}
