//! `ws-behavior` — what an animal does on its turn.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`context`] | `SimContext<'a>` — grid, store, scheduler and RNG for one turn  |
//! | [`forager`] | `Forager` trait (`choose_move` + `feed`), `forager_for`         |
//! | [`sheep`]   | `SheepBehavior` — flee wolves, seek grass, graze                |
//! | [`wolf`]    | `WolfBehavior` — chase sheep, eat one co-located sheep          |
//! | [`step`]    | `step_animal` state machine, `StepOutcome`                      |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Turn order
//!
//! ```text
//! alive at start of turn?  no → Skipped
//! move        (species-specific, may stay)
//! metabolize  energy -= 1
//! feed        (species-specific)
//! resolve     energy < 0            → Died (no reproduction draw)
//!             u ~ U(0,1) < p        → Reproduced (energy split in half)
//!             otherwise             → Survived
//! ```

pub mod context;
pub mod error;
pub mod forager;
pub mod sheep;
pub mod step;
pub mod wolf;


pub use context::SimContext;
pub use error::{BehaviorError, BehaviorResult};
pub use forager::{Forager, forager_for};
pub use sheep::SheepBehavior;
pub use step::{StepOutcome, step_animal};
pub use wolf::WolfBehavior;
