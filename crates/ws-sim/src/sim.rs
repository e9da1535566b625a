//! The `Sim` struct and its tick loop.

use tracing::{debug, info, trace};

use ws_agent::{AgentStore, Animal, GrassEvent, RegrowthScheduler};
use ws_behavior::{SimContext, StepOutcome, step_animal};
use ws_core::{AgentId, SimClock, SimConfig, SimRng, Tick};
use ws_spatial::Grid;

use crate::{SimError, SimObserver, SimResult, SimSnapshot};

// ── Reports ───────────────────────────────────────────────────────────────────

/// Population sizes exposed to reporting collaborators each tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationCounts {
    pub sheep:       usize,
    pub wolves:      usize,
    pub grown_grass: usize,
}

impl PopulationCounts {
    /// `true` once either animal population has died out.
    pub fn extinct(&self) -> bool {
        self.sheep == 0 || self.wolves == 0
    }
}

/// What one tick did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick:      Tick,
    /// Grass patches that finished regrowing at the start of the tick.
    pub regrown:   usize,
    /// Animals that took a turn.
    pub activated: usize,
    /// Activation slots whose animal was eaten before its turn.
    pub skipped:   usize,
    pub births:    usize,
    pub starved:   usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (total ticks, seed, early stop, snapshot cadence).
    pub config: SimConfig,

    /// Current tick.  Tick 0 is setup; the first `step` runs tick 1.
    pub clock: SimClock,

    pub grid: Grid,

    /// Owner of every animal and grass patch.
    pub agents: AgentStore,

    /// Pending grass regrowth events.
    pub scheduler: RegrowthScheduler,

    /// The single random source for the whole run.
    pub rng: SimRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Step until `config.end_tick()`, or until a population dies out when
    /// `config.stop_on_extinction` is set.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            start = self.clock.current_tick.0,
            end = self.config.end_tick().0,
            seed = self.config.seed,
            "simulation starting"
        );
        let mut counts = self.counts();
        while self.clock.current_tick < self.config.end_tick() {
            if self.config.stop_on_extinction && counts.extinct() {
                info!(tick = self.clock.current_tick.0, ?counts, "population extinct, stopping");
                break;
            }
            counts = self.observed_step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick, &counts);
        info!(tick = self.clock.current_tick.0, ?counts, "simulation finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and extinction).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Advance one tick: fire due regrowth, then activate every live animal
    /// in a fresh random order.
    pub fn step(&mut self) -> SimResult<TickReport> {
        let now = self.clock.advance();
        let regrown = self.fire_regrowth(now)?;
        let order = self.agents.activation_order(&mut self.rng);
        let mut report = self.activate(&order)?;
        report.regrown = regrown;
        trace!(tick = now.0, ?report, "tick complete");
        Ok(report)
    }

    /// Give each id in `order` its turn at the current tick.
    ///
    /// [`step`](Self::step) calls this with a shuffled order; it is public so
    /// drivers and tests can impose a specific order.  Dead ids are skipped.
    pub fn activate(&mut self, order: &[AgentId]) -> SimResult<TickReport> {
        let now = self.clock.current_tick;
        let mut report = TickReport { tick: now, ..TickReport::default() };
        let mut ctx = SimContext::new(
            now,
            &mut self.grid,
            &mut self.agents,
            &mut self.scheduler,
            &mut self.rng,
        );
        for &agent in order {
            match step_animal(agent, &mut ctx)? {
                StepOutcome::Skipped => report.skipped += 1,
                StepOutcome::Died => {
                    report.activated += 1;
                    report.starved += 1;
                }
                StepOutcome::Reproduced { .. } => {
                    report.activated += 1;
                    report.births += 1;
                }
                StepOutcome::Survived => report.activated += 1,
            }
        }
        Ok(report)
    }

    /// Current population sizes.
    pub fn counts(&self) -> PopulationCounts {
        PopulationCounts {
            sheep:       self.agents.sheep_count(),
            wolves:      self.agents.wolf_count(),
            grown_grass: self.agents.grown_grass_count(),
        }
    }

    /// A live animal by id.
    pub fn animal(&self, id: AgentId) -> SimResult<&Animal> {
        Ok(self.agents.animal_checked(id)?)
    }

    /// Live animals in ascending id order.
    pub fn animals(&self) -> impl Iterator<Item = (AgentId, &Animal)> + '_ {
        self.agents.animals()
    }

    /// Capture the minimal state needed to resume this run.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot::capture(self)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<PopulationCounts> {
        observer.on_tick_start(self.clock.current_tick + 1);
        let report = self.step()?;
        let counts = self.counts();
        observer.on_tick_end(report.tick, &report, &counts);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && report.tick.0 % interval == 0 {
            observer.on_snapshot(report.tick, &self.snapshot());
        }
        Ok(counts)
    }

    /// Apply every regrowth event due at `now`.
    fn fire_regrowth(&mut self, now: Tick) -> SimResult<usize> {
        let agents = &mut self.agents;
        let fired = self.scheduler.fire_due(now, |event| {
            let applied = match event.mutation {
                GrassEvent::Regrow => agents.regrow_grass(event.target),
            };
            if applied { Ok(()) } else { Err(SimError::BadEventTarget(event.target)) }
        })?;
        if fired > 0 {
            debug!(tick = now.0, regrown = fired, "grass regrown");
        }
        Ok(fired)
    }
}
