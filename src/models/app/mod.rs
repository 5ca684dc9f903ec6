pub mod app_state;
pub mod session;

pub use app_state::{AppState, SharedSession};
pub use session::{AnalysisPhase, AnalysisSession, Ticket};
