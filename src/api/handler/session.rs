use crate::error::ApiError;
use crate::models::api::{AnalyzeParams, SessionSnapshot, StrategyParams};
use crate::models::AppState;
use crate::services::site_audit_service::dispatch;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use log::{error, info};
use std::sync::Arc;

pub async fn create_session_handler(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let (id, session) = state.create_session().await;
    info!("Created analysis session {}", id);

    let session = session.lock().await;
    (StatusCode::CREATED, Json(SessionSnapshot::of(id, &session)))
}

pub async fn get_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let (id, session) = state.find_session(&id).await?;
    let session = session.lock().await;
    Ok(Json(SessionSnapshot::of(id, &session)))
}

// The session lock is released while the PageSpeed calls are in flight; the
// ticket decides whether this result is still the one to keep. Dispatch and
// completion run in a spawned task that outlives the request.
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<AnalyzeParams>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Json(params) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let (id, session) = state.find_session(&id).await?;

    let ticket = {
        let mut session = session.lock().await;
        match session.submit(&params.url) {
            Some(ticket) => ticket,
            None => return Ok(Json(SessionSnapshot::of(id, &session))),
        }
    };

    info!("Session {} analyzing {}", id, ticket.url);
    let analysis = tokio::spawn(async move {
        let result = dispatch(&state.client, &ticket.url).await;
        let mut session = session.lock().await;
        session.complete(&ticket, result);
        SessionSnapshot::of(id, &session)
    });

    let snapshot = analysis.await.map_err(|e| {
        error!("Analysis task for session {} failed: {}", id, e);
        ApiError::Internal(e.to_string())
    })?;
    Ok(Json(snapshot))
}

pub async fn delete_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = state.remove_session(&id).await?;
    info!("Deleted analysis session {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_strategy_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<StrategyParams>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Json(params) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let (id, session) = state.find_session(&id).await?;

    let mut session = session.lock().await;
    session.set_strategy(params.strategy);
    Ok(Json(SessionSnapshot::of(id, &session)))
}
