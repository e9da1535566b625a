//! `ws-core` — foundational types for the `rust_ws` predator/prey ecology.
//!
//! This crate is a dependency of every other `ws-*` crate.  It has no `ws-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (the single shared random source)            |
//! | [`error`]       | `WsError`, `WsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WsError, WsResult};
pub use ids::{AgentId, CellId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
