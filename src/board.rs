//! Board model: mine placement, neighbor counts and reveals.
//!
//! The agent never touches the board directly; drivers reveal cells here and
//! feed the resulting counts into [`Agent::add_knowledge`](crate::agent::Agent::add_knowledge).

use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::types::{Cell, NeighborCache};
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;

/// What a reveal uncovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Mine,
    /// Safe, with this many mines among its neighbors.
    Safe(u8),
}

/// A fixed mine layout with pre-computed neighbor counts.
#[derive(Debug, Clone)]
pub struct Board {
    neighbors: NeighborCache,
    /// Row-major, 1 = mine.
    mines: Vec<u8>,
    /// Row-major neighbor mine counts, computed for every cell.
    numbers: Vec<u8>,
    mine_cells: BTreeSet<Cell>,
}

impl Board {
    /// Place exactly `config.mines` mines uniformly at random.
    pub fn random<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let neighbors = NeighborCache::new(config.height, config.width);
        let mut mine_cells = BTreeSet::new();

        while mine_cells.len() < config.mines {
            let cell = Cell::new(
                rng.random_range(0..config.height),
                rng.random_range(0..config.width),
            );
            mine_cells.insert(cell);
        }

        Ok(Self::build(neighbors, mine_cells))
    }

    /// Explicit layout, mostly for tests and replays.
    pub fn with_mines(
        height: usize,
        width: usize,
        mines: impl IntoIterator<Item = Cell>,
    ) -> Result<Self> {
        let neighbors = NeighborCache::new(height, width);
        let mut mine_cells = BTreeSet::new();
        for cell in mines {
            if !neighbors.contains(cell) {
                return Err(Error::CellOutOfBounds { cell, height, width });
            }
            mine_cells.insert(cell);
        }
        Ok(Self::build(neighbors, mine_cells))
    }

    fn build(neighbors: NeighborCache, mine_cells: BTreeSet<Cell>) -> Self {
        let mut mines = vec![0u8; neighbors.len()];
        for &cell in &mine_cells {
            mines[neighbors.index(cell)] = 1;
        }
        let numbers = calculate_numbers(&mines, &neighbors);
        Self {
            neighbors,
            mines,
            numbers,
            mine_cells,
        }
    }

    pub fn height(&self) -> usize {
        self.neighbors.height()
    }

    pub fn width(&self) -> usize {
        self.neighbors.width()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_cells.len()
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mine_cells
    }

    /// Panics if `cell` is outside the board.
    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines[self.neighbors.index(cell)] != 0
    }

    /// Mines among the up-to-eight neighbors of `cell`, excluding the cell itself.
    pub fn nearby_mines(&self, cell: Cell) -> u8 {
        self.numbers[self.neighbors.index(cell)]
    }

    pub fn reveal(&self, cell: Cell) -> Result<Reveal> {
        if !self.neighbors.contains(cell) {
            return Err(Error::CellOutOfBounds {
                cell,
                height: self.height(),
                width: self.width(),
            });
        }
        Ok(if self.is_mine(cell) {
            Reveal::Mine
        } else {
            Reveal::Safe(self.nearby_mines(cell))
        })
    }

    /// True iff the flagged cells are exactly the mines.
    pub fn won(&self, mines_found: &BTreeSet<Cell>) -> bool {
        *mines_found == self.mine_cells
    }
}

/// Count adjacent mines for every cell, mines included.
fn calculate_numbers(mines: &[u8], neighbors: &NeighborCache) -> Vec<u8> {
    neighbors
        .cells()
        .map(|cell| {
            neighbors
                .get(cell)
                .iter()
                .filter(|&&n| mines[neighbors.index(n)] != 0)
                .count() as u8
        })
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "--".repeat(self.width());
        for row in 0..self.height() {
            writeln!(f, "{rule}-")?;
            for col in 0..self.width() {
                let mark = if self.is_mine(Cell::new(row, col)) { 'X' } else { ' ' };
                write!(f, "|{mark}")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{rule}-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    #[test]
    fn test_random_mine_count() {
        let mut rng = GameRng::from_seed(42);
        let config = GameConfig { height: 16, width: 30, mines: 99, seed: None };
        let board = Board::random(&config, &mut rng).unwrap();
        assert_eq!(board.mine_count(), 99);
        let flagged = board.mines.iter().filter(|&&m| m != 0).count();
        assert_eq!(flagged, 99);
        assert_eq!(board.mines().len(), 99);
        assert!(board.mines().iter().all(|&cell| board.is_mine(cell)));
        assert!(board.won(board.mines()));
    }

    #[test]
    fn test_random_full_board() {
        let mut rng = GameRng::from_seed(1);
        let config = GameConfig { height: 3, width: 3, mines: 9, seed: None };
        let board = Board::random(&config, &mut rng).unwrap();
        assert_eq!(board.mine_count(), 9);
    }

    #[test]
    fn test_random_rejects_too_many_mines() {
        let mut rng = GameRng::from_seed(1);
        let config = GameConfig { height: 2, width: 2, mines: 5, seed: None };
        assert!(matches!(
            Board::random(&config, &mut rng),
            Err(Error::TooManyMines { mines: 5, cells: 4 })
        ));
    }

    #[test]
    fn test_numbers_center_mine() {
        let board = Board::with_mines(3, 3, [Cell::new(1, 1)]).unwrap();
        for cell in NeighborCache::new(3, 3).cells() {
            if cell != Cell::new(1, 1) {
                assert_eq!(board.nearby_mines(cell), 1);
                assert_eq!(board.reveal(cell).unwrap(), Reveal::Safe(1));
            }
        }
        assert_eq!(board.nearby_mines(Cell::new(1, 1)), 0);
        assert_eq!(board.reveal(Cell::new(1, 1)).unwrap(), Reveal::Mine);
    }

    #[test]
    fn test_numbers_corner_mine() {
        let board = Board::with_mines(3, 3, [Cell::new(0, 0)]).unwrap();
        assert_eq!(board.nearby_mines(Cell::new(0, 1)), 1);
        assert_eq!(board.nearby_mines(Cell::new(1, 0)), 1);
        assert_eq!(board.nearby_mines(Cell::new(1, 1)), 1);
        assert_eq!(board.nearby_mines(Cell::new(0, 2)), 0);
        assert_eq!(board.nearby_mines(Cell::new(2, 2)), 0);
    }

    #[test]
    fn test_with_mines_rejects_out_of_bounds() {
        assert!(matches!(
            Board::with_mines(2, 2, [Cell::new(0, 2)]),
            Err(Error::CellOutOfBounds { .. })
        ));
        let board = Board::with_mines(2, 2, []).unwrap();
        assert!(board.reveal(Cell::new(5, 0)).is_err());
    }

    #[test]
    fn test_won() {
        let board = Board::with_mines(2, 2, [Cell::new(0, 1)]).unwrap();
        assert!(board.won(&BTreeSet::from([Cell::new(0, 1)])));
        assert!(!board.won(&BTreeSet::new()));
        assert!(!board.won(&BTreeSet::from([Cell::new(0, 1), Cell::new(1, 1)])));
    }

    #[test]
    fn test_display() {
        let board = Board::with_mines(1, 2, [Cell::new(0, 1)]).unwrap();
        assert_eq!(board.to_string(), "-----\n| |X|\n-----\n");
    }
}
