//! Core geometry types for the agent.
//!
//! Grids are stored flat in row-major layout: `cells[row * width + col]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One grid coordinate. Ordered lexicographically by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Pre-computed neighbor cache for all cells.
///
/// Stores the 8-directional neighbors (clipped to grid bounds) for every cell.
/// Indexed by `row * width + col`, each entry is a slice of [`Cell`]s.
#[derive(Debug, Clone)]
pub struct NeighborCache {
    height: usize,
    width: usize,
    /// Flat storage of all neighbors.
    data: Vec<Cell>,
    /// offsets[i] = start index in `data` for cell i.
    /// offsets[i+1] - offsets[i] = number of neighbors for cell i.
    offsets: Vec<usize>,
}

impl NeighborCache {
    /// Build the neighbor cache for a grid of the given dimensions.
    pub fn new(height: usize, width: usize) -> Self {
        let total = height * width;
        let mut data = Vec::with_capacity(total * 8);
        let mut offsets = Vec::with_capacity(total + 1);

        for row in 0..height {
            for col in 0..width {
                offsets.push(data.len());
                for dr in -1isize..=1 {
                    for dc in -1isize..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = row as isize + dr;
                        let nc = col as isize + dc;
                        if nr >= 0 && nr < height as isize && nc >= 0 && nc < width as isize {
                            data.push(Cell::new(nr as usize, nc as usize));
                        }
                    }
                }
            }
        }
        offsets.push(data.len()); // sentinel

        Self {
            height,
            width,
            data,
            offsets,
        }
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells on the grid.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.height * self.width
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Row-major flat index. Caller guarantees `contains(cell)`.
    #[inline(always)]
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Get the pre-computed neighbors of `cell`.
    ///
    /// Panics if `cell` is outside the grid.
    #[inline(always)]
    pub fn get(&self, cell: Cell) -> &[Cell] {
        let idx = self.index(cell);
        &self.data[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_order_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn test_neighbor_cache_corners() {
        let nc = NeighborCache::new(5, 5);
        assert_eq!(nc.get(Cell::new(0, 0)).len(), 3);
        assert_eq!(nc.get(Cell::new(0, 2)).len(), 5);
        assert_eq!(nc.get(Cell::new(2, 2)).len(), 8);
        assert_eq!(nc.get(Cell::new(4, 4)).len(), 3);
    }

    #[test]
    fn test_neighbor_cache_non_square() {
        let nc = NeighborCache::new(1, 2);
        assert_eq!(nc.get(Cell::new(0, 0)), &[Cell::new(0, 1)]);
        assert_eq!(nc.get(Cell::new(0, 1)), &[Cell::new(0, 0)]);

        let nc = NeighborCache::new(3, 7);
        for cell in nc.cells() {
            for &n in nc.get(cell) {
                assert!(nc.contains(n));
                assert!(n.row.abs_diff(cell.row) <= 1 && n.col.abs_diff(cell.col) <= 1);
                assert_ne!(n, cell);
            }
        }
    }

    #[test]
    fn test_cells_row_major() {
        let nc = NeighborCache::new(2, 3);
        let cells: Vec<Cell> = nc.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_contains() {
        let nc = NeighborCache::new(2, 3);
        assert!(nc.contains(Cell::new(1, 2)));
        assert!(!nc.contains(Cell::new(2, 0)));
        assert!(!nc.contains(Cell::new(0, 3)));
    }
}
