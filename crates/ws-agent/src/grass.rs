//! The two-state grass regrowth automaton.
//!
//! ```text
//!         consume(now)  (schedules one Regrow at now + regrowth_time)
//! FullyGrown ─────────────────────────────────────────────► Growing
//!     ▲                                                       │
//!     └──────────────── on_regrowth_fired() ◄─────────────────┘
//! ```
//!
//! `consume` is the only way out of `FullyGrown` and it is refused unless
//! the patch is grown, so a patch never has more than one pending regrowth.

use ws_core::{AgentId, CellId, Tick};
use ws_schedule::EventScheduler;

use crate::{AgentError, AgentResult};

/// Mutations the scheduler can carry for a grass patch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrassEvent {
    Regrow,
}

/// The scheduler type that drives grass: targets are patch ids.
pub type RegrowthScheduler = EventScheduler<AgentId, GrassEvent>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrassState {
    Growing,
    FullyGrown,
}

/// A forage patch fixed to one cell for its whole life.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrassPatch {
    cell:          CellId,
    state:         GrassState,
    regrowth_time: i64,
}

impl GrassPatch {
    /// Create the patch `id` in `cell`.
    ///
    /// A zero `countdown` starts it fully grown; otherwise it starts growing
    /// with its first regrowth queued `countdown` ticks from now.
    pub fn new(
        id:            AgentId,
        cell:          CellId,
        countdown:     i64,
        regrowth_time: i64,
        scheduler:     &mut RegrowthScheduler,
    ) -> AgentResult<Self> {
        if regrowth_time < 0 {
            return Err(AgentError::InvalidRegrowth { what: "regrowth time", value: regrowth_time });
        }
        if countdown < 0 {
            return Err(AgentError::InvalidRegrowth { what: "countdown", value: countdown });
        }
        let state = if countdown == 0 {
            GrassState::FullyGrown
        } else {
            scheduler.schedule_relative(countdown, id, GrassEvent::Regrow)?;
            GrassState::Growing
        };
        Ok(Self { cell, state, regrowth_time })
    }

    /// Rebuild a patch from recorded state without touching any scheduler.
    /// The caller restores the pending regrowth event itself.
    pub fn restored(cell: CellId, fully_grown: bool, regrowth_time: i64) -> AgentResult<Self> {
        if regrowth_time < 0 {
            return Err(AgentError::InvalidRegrowth { what: "regrowth time", value: regrowth_time });
        }
        let state = if fully_grown { GrassState::FullyGrown } else { GrassState::Growing };
        Ok(Self { cell, state, regrowth_time })
    }

    #[inline]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub fn state(&self) -> GrassState {
        self.state
    }

    #[inline]
    pub fn fully_grown(&self) -> bool {
        self.state == GrassState::FullyGrown
    }

    #[inline]
    pub fn regrowth_time(&self) -> i64 {
        self.regrowth_time
    }

    /// Eat the patch at tick `now`.  Returns `false` and does nothing if it
    /// is still growing; otherwise switches to `Growing` and queues exactly
    /// one `Regrow` due at `now + regrowth_time`.
    ///
    /// The due tick depends only on `now`, never on how far the scheduler
    /// has been fired.
    pub fn consume(&mut self, id: AgentId, now: Tick, scheduler: &mut RegrowthScheduler) -> AgentResult<bool> {
        if self.state != GrassState::FullyGrown {
            return Ok(false);
        }
        // regrowth_time >= 0 is checked at construction.
        let due = now + self.regrowth_time as u64;
        scheduler.schedule_at(due, id, GrassEvent::Regrow)?;
        self.state = GrassState::Growing;
        Ok(true)
    }

    /// Apply a fired `Regrow` event.
    #[inline]
    pub fn on_regrowth_fired(&mut self) {
        self.state = GrassState::FullyGrown;
    }
}
