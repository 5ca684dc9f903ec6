pub mod health;
pub mod session;

pub use health::health_handler;
pub use session::{
    analyze_handler, create_session_handler, delete_session_handler, get_session_handler,
    set_strategy_handler,
};
