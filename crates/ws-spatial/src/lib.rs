//! `ws-spatial` — the cell grid the animals live on.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`grid`]  | `Grid` (CSR neighbor table + occupant sets), `GridConfig`, `Boundary` |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GridConfig`/`Boundary`. |

pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::{Boundary, Grid, GridConfig};
