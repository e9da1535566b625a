//! Rectangular cell grid with a precomputed Moore neighborhood.
//!
//! # Data layout
//!
//! Cells are addressed row-major (`CellId = y * width + x`).  Neighbor lists
//! use **Compressed Sparse Row** format so every lookup is a contiguous
//! slice:
//!
//! ```text
//! neighbors(c) = neighbor_cells[ neighbor_start[c] .. neighbor_start[c+1] ]
//! ```
//!
//! The table is built once in [`Grid::new`] and never changes.  Occupant
//! sets are plain `Vec<AgentId>` per cell: small, order-stable under a fixed
//! seed, and unique by construction (`place` refuses duplicates).

use ws_core::{AgentId, CellId, SimRng};

use crate::{SpatialError, SpatialResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Edge policy for neighborhood computation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Cells on the border simply have fewer neighbors.
    #[default]
    Fixed,
    /// Opposite edges are adjacent.
    Torus,
}

/// Grid dimensions and boundary policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width:    u32,
    pub height:   u32,
    pub boundary: Boundary,
}

impl GridConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, boundary: Boundary::Fixed }
    }

    pub fn torus(mut self) -> Self {
        self.boundary = Boundary::Torus;
        self
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The spatial grid: fixed topology plus per-cell occupant sets.
pub struct Grid {
    width:    u32,
    height:   u32,
    boundary: Boundary,

    /// CSR row pointer.  Length = `cell_count + 1`.
    neighbor_start: Vec<u32>,
    /// Concatenated neighbor lists, in (dy, dx) scan order per cell.
    neighbor_cells: Vec<CellId>,

    /// Agents currently in each cell, indexed by `CellId`.
    occupants: Vec<Vec<AgentId>>,
}

impl Grid {
    /// Build the grid and its neighbor table.
    pub fn new(config: &GridConfig) -> SpatialResult<Self> {
        let (width, height, boundary) = (config.width, config.height, config.boundary);
        // Cell ids and CSR offsets (at most 8 per cell) are stored as u32.
        let fits = (width as u64)
            .checked_mul(height as u64)
            .and_then(|cells| cells.checked_mul(8))
            .is_some_and(|slots| slots <= u32::MAX as u64);
        if width == 0 || height == 0 || !fits {
            return Err(SpatialError::InvalidDimensions { width, height });
        }
        let cell_count = width as usize * height as usize;

        let mut neighbor_start = Vec::with_capacity(cell_count + 1);
        let mut neighbor_cells = Vec::with_capacity(cell_count * 8);
        neighbor_start.push(0u32);

        for y in 0..height as i64 {
            for x in 0..width as i64 {
                let this = CellId((y * width as i64 + x) as u32);
                let row_begin = neighbor_cells.len();
                for dy in -1..=1i64 {
                    for dx in -1..=1i64 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (nx, ny) = (x + dx, y + dy);
                        let (nx, ny) = match boundary {
                            Boundary::Fixed => {
                                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                                    continue;
                                }
                                (nx, ny)
                            }
                            Boundary::Torus => {
                                (nx.rem_euclid(width as i64), ny.rem_euclid(height as i64))
                            }
                        };
                        let cell = CellId((ny * width as i64 + nx) as u32);
                        // Small tori wrap onto themselves or onto the same
                        // neighbor twice.
                        if cell == this || neighbor_cells[row_begin..].contains(&cell) {
                            continue;
                        }
                        neighbor_cells.push(cell);
                    }
                }
                neighbor_start.push(neighbor_cells.len() as u32);
            }
        }

        Ok(Self {
            width,
            height,
            boundary,
            neighbor_start,
            neighbor_cells,
            occupants: vec![Vec::new(); cell_count],
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn cell_count(&self) -> usize {
        self.occupants.len()
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> GridConfig {
        GridConfig { width: self.width, height: self.height, boundary: self.boundary }
    }

    /// Iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.cell_count() as u32).map(CellId)
    }

    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        cell.index() < self.cell_count()
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// Cell at column `x`, row `y`.
    pub fn cell_at(&self, x: u32, y: u32) -> SpatialResult<CellId> {
        if x >= self.width || y >= self.height {
            return Err(SpatialError::CellOutOfBounds { x, y });
        }
        Ok(CellId(y * self.width + x))
    }

    /// `(x, y)` of `cell`.
    #[inline]
    pub fn coords(&self, cell: CellId) -> (u32, u32) {
        (cell.0 % self.width, cell.0 / self.width)
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// The fixed Moore neighborhood of `cell` (never includes `cell`).
    #[inline]
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        let start = self.neighbor_start[cell.index()] as usize;
        let end   = self.neighbor_start[cell.index() + 1] as usize;
        &self.neighbor_cells[start..end]
    }

    /// Subset of `cells` satisfying `predicate`, in input order.
    pub fn select<F>(cells: &[CellId], mut predicate: F) -> Vec<CellId>
    where
        F: FnMut(CellId) -> bool,
    {
        cells.iter().copied().filter(|&c| predicate(c)).collect()
    }

    /// Uniform draw from `cells`.
    ///
    /// Callers are expected to branch on emptiness first; reaching the error
    /// means a guard was skipped.
    pub fn random_cell(cells: &[CellId], rng: &mut SimRng) -> SpatialResult<CellId> {
        rng.choose(cells).copied().ok_or(SpatialError::EmptySelection)
    }

    // ── Occupant bookkeeping ──────────────────────────────────────────────

    /// Agents currently recorded in `cell`.
    #[inline]
    pub fn occupants(&self, cell: CellId) -> &[AgentId] {
        &self.occupants[cell.index()]
    }

    /// Record `agent` as an occupant of `cell`.  Placing an agent that is
    /// already there is a no-op.
    pub fn place(&mut self, agent: AgentId, cell: CellId) -> SpatialResult<()> {
        let slot = self
            .occupants
            .get_mut(cell.index())
            .ok_or(SpatialError::UnknownCell(cell))?;
        if !slot.contains(&agent) {
            slot.push(agent);
        }
        Ok(())
    }

    /// Remove `agent` from `cell`.  Returns `false` if it was not there.
    pub fn vacate(&mut self, agent: AgentId, cell: CellId) -> bool {
        let Some(slot) = self.occupants.get_mut(cell.index()) else {
            return false;
        };
        match slot.iter().position(|&a| a == agent) {
            Some(pos) => {
                // `remove` rather than `swap_remove` keeps the remaining
                // occupants in arrival order.
                slot.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Move `agent` from `from` to `to`.  Returns `false` (and leaves the
    /// grid untouched) if `agent` was not recorded in `from`.
    pub fn relocate(&mut self, agent: AgentId, from: CellId, to: CellId) -> SpatialResult<bool> {
        if !self.contains(to) {
            return Err(SpatialError::UnknownCell(to));
        }
        if from == to {
            return Ok(self.occupants(from).contains(&agent));
        }
        if !self.vacate(agent, from) {
            return Ok(false);
        }
        self.place(agent, to)?;
        Ok(true)
    }
}
