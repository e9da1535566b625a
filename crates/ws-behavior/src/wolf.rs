//! Wolves: move toward sheep, eat one sheep per turn.

use tracing::debug;

use ws_agent::Species;
use ws_core::{AgentId, CellId};
use ws_spatial::Grid;

use crate::{BehaviorError, BehaviorResult, Forager, SimContext};

pub struct WolfBehavior;

impl Forager for WolfBehavior {
    fn species(&self) -> Species {
        Species::Wolf
    }

    /// Neighbors holding a sheep are preferred; otherwise any neighbor.
    fn choose_move(&self, agent: AgentId, ctx: &mut SimContext<'_>) -> BehaviorResult<Option<CellId>> {
        let cell = ctx.animal_cell(agent)?;
        let neighbors = ctx.grid.neighbors(cell);
        let with_sheep = Grid::select(neighbors, |c| ctx.has_species(c, Species::Sheep));
        let targets = if with_sheep.is_empty() { neighbors.to_vec() } else { with_sheep };
        // A 1x1 fixed grid has no neighbors at all.
        if targets.is_empty() {
            return Ok(None);
        }
        Ok(Some(Grid::random_cell(&targets, ctx.rng)?))
    }

    /// Only sheep still alive in the cell are candidates, so two wolves can
    /// never eat the same sheep.
    fn feed(&self, agent: AgentId, ctx: &mut SimContext<'_>) -> BehaviorResult<()> {
        let cell = ctx.animal_cell(agent)?;
        let prey = ctx.animals_in(cell, Species::Sheep);
        let Some(&victim) = ctx.rng.choose(&prey) else {
            return Ok(());
        };

        ctx.agents
            .animal_mut(agent)
            .ok_or(BehaviorError::AgentMissing(agent))?
            .eat();
        ctx.kill(victim);
        debug!(tick = ctx.tick.0, wolf = agent.0, sheep = victim.0, "sheep eaten");
        Ok(())
    }
}
