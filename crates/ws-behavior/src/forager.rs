//! The per-species capability interface.

use ws_agent::Species;
use ws_core::{AgentId, CellId};

use crate::{BehaviorResult, SheepBehavior, SimContext, WolfBehavior};

/// How one species moves and eats.
///
/// The shared turn sequence lives in [`step_animal`][crate::step_animal];
/// implementations supply only the two species-specific phases.
pub trait Forager: Send + Sync + 'static {
    fn species(&self) -> Species;

    /// Pick the cell to move to this turn, or `None` to stay put.
    fn choose_move(&self, agent: AgentId, ctx: &mut SimContext<'_>) -> BehaviorResult<Option<CellId>>;

    /// Eat whatever is available in the animal's current cell.
    fn feed(&self, agent: AgentId, ctx: &mut SimContext<'_>) -> BehaviorResult<()>;
}

/// The behavior implementation for `species`.
pub fn forager_for(species: Species) -> &'static dyn Forager {
    match species {
        Species::Sheep => &SheepBehavior,
        Species::Wolf => &WolfBehavior,
    }
}
