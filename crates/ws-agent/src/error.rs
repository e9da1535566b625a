use thiserror::Error;

use ws_schedule::ScheduleError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid animal parameters: {0}")]
    InvalidParams(String),

    #[error("grass {what} must be non-negative, got {value}")]
    InvalidRegrowth { what: &'static str, value: i64 },

    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type AgentResult<T> = Result<T, AgentError>;
