//! Minimal persisted state for resuming a run.
//!
//! A snapshot records what cannot be recomputed: every live animal's species,
//! position, energy and parameters, and every grass patch's position, growth
//! state, regrowth time and pending regrowth tick.  Agent ids are not kept;
//! [`SimBuilder::from_snapshot`][crate::SimBuilder::from_snapshot] assigns
//! fresh ones in record order.

use std::collections::HashMap;

use ws_agent::{Animal, GrassEvent, Species};
use ws_core::{AgentId, Tick};
use ws_spatial::GridConfig;

use crate::Sim;

/// One live animal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimalRecord {
    pub species:          Species,
    pub x:                u32,
    pub y:                u32,
    pub energy:           f64,
    pub p_reproduce:      f64,
    pub energy_from_food: f64,
}

/// One grass patch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrassRecord {
    pub x:             u32,
    pub y:             u32,
    pub fully_grown:   bool,
    pub regrowth_time: i64,
    /// Due tick of the queued regrowth; `Some` exactly when growing.
    pub regrows_at:    Option<Tick>,
}

/// Full resumable state of a [`Sim`] at the end of `tick`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSnapshot {
    pub tick:    Tick,
    pub grid:    GridConfig,
    pub animals: Vec<AnimalRecord>,
    pub grass:   Vec<GrassRecord>,
}

impl SimSnapshot {
    pub(crate) fn capture(sim: &Sim) -> Self {
        let animals = sim
            .agents
            .animals()
            .map(|(_, animal)| AnimalRecord::from_animal(sim, animal))
            .collect();

        // One pass over the queue; a patch never has more than one pending
        // regrowth.
        let regrows_at: HashMap<AgentId, Tick> = sim
            .scheduler
            .pending()
            .filter(|ev| *ev.mutation == GrassEvent::Regrow)
            .map(|ev| (*ev.target, ev.due))
            .collect();

        let grass = sim
            .agents
            .grass_patches()
            .map(|(id, patch)| {
                let (x, y) = sim.grid.coords(patch.cell());
                GrassRecord {
                    x,
                    y,
                    fully_grown: patch.fully_grown(),
                    regrowth_time: patch.regrowth_time(),
                    regrows_at: regrows_at.get(&id).copied(),
                }
            })
            .collect();

        Self {
            tick: sim.clock.current_tick,
            grid: sim.grid.config(),
            animals,
            grass,
        }
    }

    pub fn count(&self, species: Species) -> usize {
        self.animals.iter().filter(|a| a.species == species).count()
    }
}

impl AnimalRecord {
    fn from_animal(sim: &Sim, animal: &Animal) -> Self {
        let (x, y) = sim.grid.coords(animal.cell);
        Self {
            species:          animal.species,
            x,
            y,
            energy:           animal.energy,
            p_reproduce:      animal.p_reproduce,
            energy_from_food: animal.energy_from_food,
        }
    }
}
