//! `ws-agent` — ownership of every agent in the ecology.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`animal`] | `Species`, `AnimalParams`, `Animal`                           |
//! | [`grass`]  | `GrassPatch`, `GrassState`, `GrassEvent`, `RegrowthScheduler` |
//! | [`store`]  | `Occupant` (closed variant), `AgentStore` (live-agent maps)   |
//! | [`error`]  | `AgentError`, `AgentResult<T>`                                |
//!
//! The grid only ever holds `AgentId`s; the store is the single owner of
//! the values behind them.

pub mod animal;
pub mod error;
pub mod grass;
pub mod store;

#[cfg(test)]
mod tests;

pub use animal::{Animal, AnimalParams, Species};
pub use error::{AgentError, AgentResult};
pub use grass::{GrassEvent, GrassPatch, GrassState, RegrowthScheduler};
pub use store::{AgentStore, Occupant};
