use crate::error::AnalysisError;
use crate::models::lighthouse::{AnalysisReport, Strategy};
use crate::models::views::ReportView;
use crate::services::report_service::report_view;
use crate::services::site_audit_service::{dispatch, ReportFetcher, ReportPair};
use crate::utils::normalize_target;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

// Where an analysis session is in its lifecycle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase_str = match self {
            AnalysisPhase::Idle => "idle",
            AnalysisPhase::Loading => "loading",
            AnalysisPhase::Loaded => "loaded",
            AnalysisPhase::Failed => "failed",
        };
        write!(f, "{}", phase_str)
    }
}

/// Handed out by [`AnalysisSession::submit`]; only the ticket of the latest
/// submission may complete the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub url: String,
}

/// State of one user's analysis page: the submitted url, both reports, the
/// error and which strategy is displayed.
#[derive(Debug)]
pub struct AnalysisSession {
    url: String,
    phase: AnalysisPhase,
    reports: Option<ReportPair>,
    error: Option<String>,
    strategy: Strategy,
    generation: u64,
    updated_at: DateTime<Utc>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    pub fn new() -> Self {
        AnalysisSession {
            url: String::new(),
            phase: AnalysisPhase::Idle,
            reports: None,
            error: None,
            strategy: Strategy::default(),
            generation: 0,
            updated_at: Utc::now(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_busy(&self) -> bool {
        self.phase == AnalysisPhase::Loading
    }

    /// Starts a new analysis. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, url: &str) -> Option<Ticket> {
        let target = normalize_target(url)?.to_string();

        self.generation += 1;
        self.url = target.clone();
        self.phase = AnalysisPhase::Loading;
        self.reports = None;
        self.error = None;
        self.touch();

        Some(Ticket {
            generation: self.generation,
            url: target,
        })
    }

    /// Applies the outcome of a dispatch. Returns false, leaving the session
    /// untouched, when a newer submission has superseded `ticket`.
    pub fn complete(&mut self, ticket: &Ticket, result: Result<ReportPair, AnalysisError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Dropping stale result for {} (generation {}, latest {})",
                ticket.url, ticket.generation, self.generation
            );
            return false;
        }

        match result {
            Ok(pair) => {
                self.reports = Some(pair);
                self.error = None;
                self.phase = AnalysisPhase::Loaded;
            }
            Err(e) => {
                self.reports = None;
                self.error = Some(e.user_message().to_string());
                self.phase = AnalysisPhase::Failed;
            }
        }
        self.touch();
        true
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
        self.touch();
    }

    pub fn current_report(&self) -> Option<&AnalysisReport> {
        self.reports.as_ref().map(|pair| pair.get(self.strategy))
    }

    pub fn views(&self) -> Option<ReportView> {
        self.current_report()
            .map(|report| report_view(report, self.strategy))
    }

    /// Submit, dispatch and complete in one go for a caller that owns the session.
    pub async fn analyze<F: ReportFetcher>(&mut self, fetcher: &F, url: &str) -> AnalysisPhase {
        if let Some(ticket) = self.submit(url) {
            let result = dispatch(fetcher, &ticket.url).await;
            self.complete(&ticket, result);
        }
        self.phase
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
