//! 核心编排层：会话状态机与主控循环

pub mod orchestrator;
pub mod state;

pub use orchestrator::{create_session, create_session_from_config, Command};
pub use state::{SessionPhase, UiState};
