//! Spatial-subsystem error type.

use thiserror::Error;

use ws_core::CellId;

/// Errors produced by `ws-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid dimensions {width}x{height} must be non-zero and address at most u32::MAX neighbor slots")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("coordinate ({x}, {y}) is outside the grid")]
    CellOutOfBounds { x: u32, y: u32 },

    #[error("cell {0} is not part of this grid")]
    UnknownCell(CellId),

    #[error("cannot draw a random cell from an empty selection")]
    EmptySelection,
}

pub type SpatialResult<T> = Result<T, SpatialError>;
