//! Simulation observer trait for progress reporting and data collection.

use ws_core::Tick;

use crate::{PopulationCounts, SimSnapshot, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — population printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_tick_end(&mut self, tick: Tick, _report: &TickReport, counts: &PopulationCounts) {
///         println!("{tick}: {} sheep, {} wolves", counts.sheep, counts.wolves);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before regrowth fires.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once every animal has had its turn.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport, _counts: &PopulationCounts) {}

    /// Called every `config.snapshot_interval_ticks` ticks (never when the
    /// interval is 0).
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &SimSnapshot) {}

    /// Called once when `run` returns normally, with the last completed tick.
    fn on_sim_end(&mut self, _final_tick: Tick, _counts: &PopulationCounts) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Records the population counts after every tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountHistory {
    pub rows: Vec<(Tick, PopulationCounts)>,
}

impl CountHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts at the last recorded tick.
    pub fn last(&self) -> Option<&PopulationCounts> {
        self.rows.last().map(|(_, c)| c)
    }
}

impl SimObserver for CountHistory {
    fn on_tick_end(&mut self, tick: Tick, _report: &TickReport, counts: &PopulationCounts) {
        self.rows.push((tick, *counts));
    }
}
