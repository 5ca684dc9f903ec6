use crate::models::app::{AnalysisPhase, AnalysisSession};
use crate::models::lighthouse::Strategy;
use crate::models::views::ReportView;
use serde::Serialize;
use uuid::Uuid;

// Everything a client needs to draw the analysis page
#[derive(Serialize, Debug)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub url: String,
    pub phase: AnalysisPhase,
    pub busy: bool,
    pub error: Option<String>,
    pub strategy: Strategy,
    pub updated_at: String,
    pub views: Option<ReportView>,
}

impl SessionSnapshot {
    pub fn of(id: Uuid, session: &AnalysisSession) -> Self {
        SessionSnapshot {
            id,
            url: session.url().to_string(),
            phase: session.phase(),
            busy: session.is_busy(),
            error: session.error().map(str::to_string),
            strategy: session.strategy(),
            updated_at: session.updated_at().to_rfc3339(),
            views: session.views(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}
