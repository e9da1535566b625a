//! Unit tests for ws-spatial.

use ws_core::{AgentId, CellId};

use crate::{Grid, GridConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fixed(w: u32, h: u32) -> Grid {
    Grid::new(&GridConfig::new(w, h)).unwrap()
}

fn torus(w: u32, h: u32) -> Grid {
    Grid::new(&GridConfig::new(w, h).torus()).unwrap()
}

// ── Construction & coordinates ────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;
    use crate::SpatialError;

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Grid::new(&GridConfig::new(0, 5)),
            Err(SpatialError::InvalidDimensions { width: 0, height: 5 })
        ));
    }

    #[test]
    fn oversized_grid_rejected_before_allocating() {
        // 70_000² cells would overflow u32 cell ids.
        assert!(matches!(
            Grid::new(&GridConfig::new(70_000, 70_000)),
            Err(SpatialError::InvalidDimensions { width: 70_000, height: 70_000 })
        ));
        assert!(matches!(
            Grid::new(&GridConfig::new(u32::MAX, u32::MAX).torus()),
            Err(SpatialError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn row_major_ids() {
        let g = fixed(4, 3);
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.cell_at(0, 0).unwrap(), CellId(0));
        assert_eq!(g.cell_at(3, 0).unwrap(), CellId(3));
        assert_eq!(g.cell_at(1, 2).unwrap(), CellId(9));
        assert_eq!(g.coords(CellId(9)), (1, 2));
    }

    #[test]
    fn out_of_bounds_coordinate() {
        let g = fixed(4, 3);
        assert!(matches!(
            g.cell_at(4, 0),
            Err(SpatialError::CellOutOfBounds { x: 4, y: 0 })
        ));
    }

    #[test]
    fn cells_iterator_covers_grid() {
        let g = fixed(3, 2);
        let all: Vec<CellId> = g.cells().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[5], CellId(5));
    }
}

// ── Neighborhoods ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod neighborhoods {
    use super::*;

    #[test]
    fn fixed_corner_edge_interior() {
        let g = fixed(3, 3);
        assert_eq!(g.neighbors(g.cell_at(0, 0).unwrap()).len(), 3);
        assert_eq!(g.neighbors(g.cell_at(1, 0).unwrap()).len(), 5);
        assert_eq!(g.neighbors(g.cell_at(1, 1).unwrap()).len(), 8);
    }

    #[test]
    fn single_cell_fixed_has_no_neighbors() {
        let g = fixed(1, 1);
        assert!(g.neighbors(CellId(0)).is_empty());
    }

    #[test]
    fn torus_corner_wraps() {
        let g = torus(5, 5);
        let corner = g.cell_at(0, 0).unwrap();
        let n = g.neighbors(corner);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&g.cell_at(4, 4).unwrap()));
        assert!(n.contains(&g.cell_at(4, 0).unwrap()));
        assert!(n.contains(&g.cell_at(0, 4).unwrap()));
    }

    #[test]
    fn small_torus_has_no_duplicates_or_self() {
        let g = torus(2, 2);
        for cell in g.cells() {
            let n = g.neighbors(cell);
            assert_eq!(n.len(), 3, "cell {cell}: {n:?}");
            assert!(!n.contains(&cell));
        }
        let one = torus(1, 1);
        assert!(one.neighbors(CellId(0)).is_empty());
    }

    #[test]
    fn neighborhood_is_symmetric() {
        let g = fixed(4, 4);
        for a in g.cells() {
            for &b in g.neighbors(a) {
                assert!(g.neighbors(b).contains(&a), "{a} -> {b} not symmetric");
            }
        }
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use ws_core::SimRng;

    use super::*;
    use crate::SpatialError;

    #[test]
    fn select_preserves_order() {
        let cells = [CellId(5), CellId(1), CellId(4), CellId(2)];
        let even = Grid::select(&cells, |c| c.0 % 2 == 0);
        assert_eq!(even, vec![CellId(4), CellId(2)]);
    }

    #[test]
    fn random_cell_from_empty_fails() {
        let mut rng = SimRng::new(1);
        assert!(matches!(
            Grid::random_cell(&[], &mut rng),
            Err(SpatialError::EmptySelection)
        ));
    }

    #[test]
    fn random_cell_stays_in_set_and_covers_it() {
        let mut rng = SimRng::new(7);
        let cells = [CellId(3), CellId(8), CellId(11)];
        let mut seen = [false; 3];
        for _ in 0..200 {
            let c = Grid::random_cell(&cells, &mut rng).unwrap();
            let i = cells.iter().position(|&x| x == c).expect("drawn cell must be in the input");
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}

// ── Occupants ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupants {
    use super::*;
    use crate::SpatialError;

    #[test]
    fn place_is_idempotent() {
        let mut g = fixed(2, 2);
        g.place(AgentId(1), CellId(0)).unwrap();
        g.place(AgentId(1), CellId(0)).unwrap();
        assert_eq!(g.occupants(CellId(0)), &[AgentId(1)]);
    }

    #[test]
    fn place_unknown_cell_errors() {
        let mut g = fixed(2, 2);
        assert!(matches!(
            g.place(AgentId(0), CellId(4)),
            Err(SpatialError::UnknownCell(CellId(4)))
        ));
    }

    #[test]
    fn vacate_keeps_arrival_order() {
        let mut g = fixed(2, 2);
        for a in 0..4 {
            g.place(AgentId(a), CellId(3)).unwrap();
        }
        assert!(g.vacate(AgentId(1), CellId(3)));
        assert!(!g.vacate(AgentId(1), CellId(3)));
        assert_eq!(g.occupants(CellId(3)), &[AgentId(0), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn relocate_moves_membership() {
        let mut g = fixed(3, 3);
        g.place(AgentId(9), CellId(0)).unwrap();
        assert!(g.relocate(AgentId(9), CellId(0), CellId(4)).unwrap());
        assert!(g.occupants(CellId(0)).is_empty());
        assert_eq!(g.occupants(CellId(4)), &[AgentId(9)]);
    }

    #[test]
    fn relocate_from_wrong_cell_is_refused() {
        let mut g = fixed(3, 3);
        g.place(AgentId(9), CellId(0)).unwrap();
        assert!(!g.relocate(AgentId(9), CellId(1), CellId(4)).unwrap());
        assert_eq!(g.occupants(CellId(0)), &[AgentId(9)]);
        assert!(g.occupants(CellId(4)).is_empty());
    }
}
