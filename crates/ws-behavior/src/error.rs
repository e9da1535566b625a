use thiserror::Error;

use ws_agent::AgentError;
use ws_core::{AgentId, CellId};
use ws_spatial::SpatialError;

/// Everything here is a broken invariant; the run cannot continue.
#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("{agent} is a sheep in {cell}, which has no grass patch")]
    MissingGrass { agent: AgentId, cell: CellId },

    #[error("{0} vanished from the agent store mid-turn")]
    AgentMissing(AgentId),

    #[error("{agent} records {cell} but the grid does not list it there")]
    Bookkeeping { agent: AgentId, cell: CellId },

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
