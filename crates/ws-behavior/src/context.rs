//! Mutable simulation state handed to every behavior call.

use ws_agent::{AgentStore, Animal, RegrowthScheduler, Species};
use ws_core::{AgentId, CellId, SimRng, Tick};
use ws_spatial::Grid;

use crate::{BehaviorError, BehaviorResult};

/// Everything an animal may read or change during its turn.
///
/// `SimContext` is rebuilt by ws-sim for each tick's activation pass from
/// disjoint borrows of the `Sim` fields.  Behaviors never reach state any
/// other way, so the random source and the scheduler are always the run's
/// own.
pub struct SimContext<'a> {
    /// Current simulation tick.
    pub tick:      Tick,
    pub grid:      &'a mut Grid,
    pub agents:    &'a mut AgentStore,
    /// Regrowth queue.  Grass eaten this turn is due at `tick + regrowth_time`.
    pub scheduler: &'a mut RegrowthScheduler,
    /// The run's single random source.
    pub rng:       &'a mut SimRng,
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        grid:      &'a mut Grid,
        agents:    &'a mut AgentStore,
        scheduler: &'a mut RegrowthScheduler,
        rng:       &'a mut SimRng,
    ) -> Self {
        Self { tick, grid, agents, scheduler, rng }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Cell of a live animal.
    pub fn animal_cell(&self, agent: AgentId) -> BehaviorResult<CellId> {
        self.agents
            .animal(agent)
            .map(|a| a.cell)
            .ok_or(BehaviorError::AgentMissing(agent))
    }

    /// `true` if any live animal of `species` occupies `cell`.
    pub fn has_species(&self, cell: CellId, species: Species) -> bool {
        self.grid
            .occupants(cell)
            .iter()
            .any(|&id| self.agents.species(id) == Some(species))
    }

    /// Live animals of `species` in `cell`, in arrival order.
    pub fn animals_in(&self, cell: CellId, species: Species) -> Vec<AgentId> {
        self.grid
            .occupants(cell)
            .iter()
            .copied()
            .filter(|&id| self.agents.species(id) == Some(species))
            .collect()
    }

    /// The grass patch in `cell`, if any.
    pub fn grass_at(&self, cell: CellId) -> Option<AgentId> {
        self.grid
            .occupants(cell)
            .iter()
            .copied()
            .find(|&id| self.agents.grass(id).is_some())
    }

    /// `true` if `cell` holds a fully grown patch.
    pub fn has_grown_grass(&self, cell: CellId) -> bool {
        self.grass_at(cell)
            .and_then(|id| self.agents.grass(id))
            .is_some_and(|g| g.fully_grown())
    }

    // ── Mutations that keep grid and store consistent ─────────────────────

    /// Move `agent` to `to`, updating both its record and the grid.
    pub fn relocate(&mut self, agent: AgentId, to: CellId) -> BehaviorResult<()> {
        let from = self.animal_cell(agent)?;
        if !self.grid.relocate(agent, from, to)? {
            return Err(BehaviorError::Bookkeeping { agent, cell: from });
        }
        if let Some(animal) = self.agents.animal_mut(agent) {
            animal.cell = to;
        }
        Ok(())
    }

    /// Add `animal` to the store and its cell.  It will not act until the
    /// next activation order is drawn.
    pub fn spawn(&mut self, animal: Animal) -> BehaviorResult<AgentId> {
        let cell = animal.cell;
        let id = self.agents.create(animal);
        self.grid.place(id, cell)?;
        Ok(id)
    }

    /// Remove a live animal from the store and its cell.  Returns `None`
    /// (and changes nothing) if it is already gone.
    pub fn kill(&mut self, agent: AgentId) -> Option<Animal> {
        let animal = self.agents.remove(agent)?;
        self.grid.vacate(agent, animal.cell);
        Some(animal)
    }
}
