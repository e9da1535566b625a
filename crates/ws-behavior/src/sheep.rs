//! Sheep: avoid wolves, head for grown grass, graze.

use ws_agent::Species;
use ws_core::{AgentId, CellId};
use ws_spatial::Grid;

use crate::{BehaviorError, BehaviorResult, Forager, SimContext};

pub struct SheepBehavior;

impl Forager for SheepBehavior {
    fn species(&self) -> Species {
        Species::Sheep
    }

    /// Safe cells are neighbors with no wolf.  Among them, cells with grown
    /// grass win; with no safe cell at all the sheep stays.
    fn choose_move(&self, agent: AgentId, ctx: &mut SimContext<'_>) -> BehaviorResult<Option<CellId>> {
        let cell = ctx.animal_cell(agent)?;
        let safe = Grid::select(ctx.grid.neighbors(cell), |c| !ctx.has_species(c, Species::Wolf));
        if safe.is_empty() {
            return Ok(None);
        }

        let grassy = Grid::select(&safe, |c| ctx.has_grown_grass(c));
        let targets = if grassy.is_empty() { safe } else { grassy };
        Ok(Some(Grid::random_cell(&targets, ctx.rng)?))
    }

    fn feed(&self, agent: AgentId, ctx: &mut SimContext<'_>) -> BehaviorResult<()> {
        let cell = ctx.animal_cell(agent)?;
        let patch_id = ctx
            .grass_at(cell)
            .ok_or(BehaviorError::MissingGrass { agent, cell })?;

        if ctx.agents.consume_grass(patch_id, ctx.tick, ctx.scheduler)? {
            let sheep = ctx
                .agents
                .animal_mut(agent)
                .ok_or(BehaviorError::AgentMissing(agent))?;
            sheep.eat();
        }
        Ok(())
    }
}
