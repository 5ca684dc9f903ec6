use crate::error::ApiError;
use crate::models::app::session::AnalysisSession;
use crate::services::site_audit_service::PageSpeedClient;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

pub type SharedSession = Arc<Mutex<AnalysisSession>>;

pub struct AppState {
    pub client: PageSpeedClient,
    sessions: RwLock<HashMap<Uuid, SharedSession>>,
    /// Sessions untouched for this long are dropped by [`AppState::expire_idle`].
    session_ttl: Duration,
}

impl AppState {
    pub fn new(client: PageSpeedClient, session_ttl: Duration) -> Self {
        AppState {
            client,
            sessions: RwLock::new(HashMap::new()),
            session_ttl,
        }
    }

    pub async fn create_session(&self) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(AnalysisSession::new()));
        self.sessions.write().await.insert(id, session.clone());
        (id, session)
    }

    pub async fn find_session(&self, raw_id: &str) -> Result<(Uuid, SharedSession), ApiError> {
        let id = parse_id(raw_id)?;
        let session = self
            .sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))?;
        Ok((id, session))
    }

    pub async fn remove_session(&self, raw_id: &str) -> Result<Uuid, ApiError> {
        let id = parse_id(raw_id)?;
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| id)
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle for at least the configured ttl as of `now`.
    /// Sessions that are loading, or locked by a request, are kept.
    pub async fn expire_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, session| {
            let Ok(session) = session.try_lock() else {
                return true;
            };
            let idle = (now - session.updated_at())
                .to_std()
                .map(|age| age >= self.session_ttl)
                .unwrap_or(false);
            if idle && !session.is_busy() {
                debug!("Expiring idle session {}", id);
                return false;
            }
            true
        });
        before - sessions.len()
    }

    /// Runs [`AppState::expire_idle`] every `period` for the life of the process.
    pub fn spawn_session_sweeper(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let expired = self.expire_idle(Utc::now()).await;
                if expired > 0 {
                    info!("Expired {} idle session(s)", expired);
                }
            }
        })
    }
}

fn parse_id(raw_id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw_id).map_err(|_| ApiError::InvalidSessionId(raw_id.to_string()))
}
