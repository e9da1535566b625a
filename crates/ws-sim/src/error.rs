use thiserror::Error;

use ws_agent::AgentError;
use ws_behavior::BehaviorError;
use ws_core::{AgentId, WsError};
use ws_schedule::ScheduleError;
use ws_spatial::SpatialError;

/// Any of these aborts the run: they all mean the world is inconsistent.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("cell ({x}, {y}) already has a grass patch")]
    DuplicateGrass { x: u32, y: u32 },

    #[error("regrowth event targets {0}, which is not a grass patch")]
    BadEventTarget(AgentId),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Core(#[from] WsError),
}

pub type SimResult<T> = Result<T, SimError>;
