//! Fluent builder for constructing a [`Sim`].

use tracing::debug;

use ws_agent::{AgentStore, Animal, AnimalParams, GrassEvent, GrassPatch, RegrowthScheduler, Species};
use ws_core::{SimClock, SimConfig, SimRng, Tick};
use ws_spatial::{Grid, GridConfig};

use crate::{Sim, SimError, SimResult, SimSnapshot};

/// One queued placement, applied in insertion order by `build`.
#[derive(Clone, Debug)]
enum Placement {
    Animal {
        species: Species,
        at:      (u32, u32),
        params:  AnimalParams,
    },
    Grass {
        at:            (u32, u32),
        countdown:     i64,
        regrowth_time: i64,
    },
}

/// Fluent builder for [`Sim`].
///
/// Placements are applied in the order they were added, so agent ids are
/// assigned in that order too.  Each cell may receive at most one grass
/// patch; animals stack freely.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), GridConfig::new(1, 1))
///     .grass((0, 0), 0, 3)
///     .sheep((0, 0), AnimalParams::new(8.0, 0.0, 4.0))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    grid:       GridConfig,
    placements: Vec<Placement>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, grid: GridConfig) -> Self {
        Self { config, grid, placements: Vec::new() }
    }

    /// Place a sheep at `(x, y)`.
    pub fn sheep(self, at: (u32, u32), params: AnimalParams) -> Self {
        self.animal(Species::Sheep, at, params)
    }

    /// Place a wolf at `(x, y)`.
    pub fn wolf(self, at: (u32, u32), params: AnimalParams) -> Self {
        self.animal(Species::Wolf, at, params)
    }

    pub fn animal(mut self, species: Species, at: (u32, u32), params: AnimalParams) -> Self {
        self.placements.push(Placement::Animal { species, at, params });
        self
    }

    /// Put a grass patch at `(x, y)`.  A zero `countdown` starts it fully
    /// grown; otherwise it regrows `countdown` ticks after setup.
    pub fn grass(mut self, at: (u32, u32), countdown: i64, regrowth_time: i64) -> Self {
        self.placements.push(Placement::Grass { at, countdown, regrowth_time });
        self
    }

    /// Validate every placement and return a ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        let grid = Grid::new(&self.grid)?;
        let mut world = World::new(grid, Tick::ZERO);

        for placement in self.placements {
            match placement {
                Placement::Animal { species, at: (x, y), params } => {
                    params.validate()?;
                    let cell = world.grid.cell_at(x, y)?;
                    world.add_animal(Animal::new(species, cell, params))?;
                }
                Placement::Grass { at: (x, y), countdown, regrowth_time } => {
                    let cell = world.grid.cell_at(x, y)?;
                    world.claim_grass_cell(x, y)?;
                    let id = world.agents.create_grass(cell, countdown, regrowth_time, &mut world.scheduler)?;
                    world.grid.place(id, cell)?;
                }
            }
        }

        debug!(
            sheep = world.agents.sheep_count(),
            wolves = world.agents.wolf_count(),
            grown_grass = world.agents.grown_grass_count(),
            "simulation built"
        );
        Ok(world.into_sim(self.config, SimClock::new()))
    }

    /// Resume from a snapshot.  The clock continues from `snapshot.tick`,
    /// every pending regrowth is re-queued at its recorded due tick, and the
    /// random source is reseeded from `config.seed`.
    pub fn from_snapshot(config: SimConfig, snapshot: &SimSnapshot) -> SimResult<Sim> {
        let grid = Grid::new(&snapshot.grid)?;
        let mut world = World::new(grid, snapshot.tick);

        for record in &snapshot.grass {
            let cell = world.grid.cell_at(record.x, record.y)?;
            world.claim_grass_cell(record.x, record.y)?;
            let patch = GrassPatch::restored(cell, record.fully_grown, record.regrowth_time)?;
            let id = world.agents.insert_grass(patch);
            world.grid.place(id, cell)?;
            match (record.fully_grown, record.regrows_at) {
                (true, None) => {}
                (false, Some(due)) => world.scheduler.schedule_at(due, id, GrassEvent::Regrow)?,
                (grown, pending) => {
                    return Err(SimError::Config(format!(
                        "grass at ({}, {}) has fully_grown={grown} but pending regrowth {pending:?}",
                        record.x, record.y
                    )));
                }
            }
        }

        for record in &snapshot.animals {
            let params = AnimalParams::new(record.energy, record.p_reproduce, record.energy_from_food);
            params.validate()?;
            let cell = world.grid.cell_at(record.x, record.y)?;
            world.add_animal(Animal::new(record.species, cell, params))?;
        }

        debug!(
            tick = snapshot.tick.0,
            animals = snapshot.animals.len(),
            grass = snapshot.grass.len(),
            "simulation restored"
        );
        Ok(world.into_sim(config, SimClock::starting_at(snapshot.tick)))
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// World state under construction.
struct World {
    grid:      Grid,
    agents:    AgentStore,
    scheduler: RegrowthScheduler,
    has_grass: Vec<bool>,
}

impl World {
    fn new(grid: Grid, now: Tick) -> Self {
        let has_grass = vec![false; grid.cell_count()];
        Self {
            grid,
            agents: AgentStore::new(),
            scheduler: RegrowthScheduler::starting_at(now),
            has_grass,
        }
    }

    fn add_animal(&mut self, animal: Animal) -> SimResult<()> {
        let cell = animal.cell;
        let id = self.agents.create(animal);
        self.grid.place(id, cell)?;
        Ok(())
    }

    /// Mark `(x, y)` as holding grass; a second patch in the same cell fails.
    fn claim_grass_cell(&mut self, x: u32, y: u32) -> SimResult<()> {
        let cell = self.grid.cell_at(x, y)?;
        let slot = &mut self.has_grass[cell.index()];
        if *slot {
            return Err(SimError::DuplicateGrass { x, y });
        }
        *slot = true;
        Ok(())
    }

    fn into_sim(self, config: SimConfig, clock: SimClock) -> Sim {
        let rng = SimRng::new(config.seed);
        Sim {
            config,
            clock,
            grid: self.grid,
            agents: self.agents,
            scheduler: self.scheduler,
            rng,
        }
    }
}
