//! `ws-sim` — tick loop orchestrator for the wolf/sheep ecology.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Clock     — advance to tick t.
//!   ② Events    — fire every regrowth due at or before t.
//!   ③ Order     — shuffle the ids of animals alive right now.
//!   ④ Activate  — step_animal for each id in that order; ids that died
//!                 earlier in the pass are skipped, newborns wait for t+1.
//!   ⑤ Observe   — report PopulationCounts (and a snapshot on interval).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ws_agent::AnimalParams;
//! use ws_core::SimConfig;
//! use ws_sim::{NoopObserver, SimBuilder};
//! use ws_spatial::GridConfig;
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), GridConfig::new(20, 20).torus())
//!     .grass((0, 0), 0, 30)
//!     .sheep((0, 0), AnimalParams::new(8.0, 0.04, 4.0))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CountHistory, NoopObserver, SimObserver};
pub use sim::{PopulationCounts, Sim, TickReport};
pub use snapshot::{AnimalRecord, GrassRecord, SimSnapshot};
