//! Errors raised at the crate boundary.
//!
//! The inference core never fails; these only come from agent inputs and
//! board / config construction.

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cell {cell} is outside the {height}x{width} grid")]
    CellOutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    #[error("cell {cell} reports {count} nearby mines but has only {max} neighbors")]
    CountOutOfRange { cell: Cell, count: u8, max: usize },

    #[error("cell {cell} is a known mine and cannot be revealed safe")]
    RevealedKnownMine { cell: Cell },

    #[error("cannot place {mines} mines on a grid of {cells} cells")]
    TooManyMines { mines: usize, cells: usize },

    #[error("grid must have at least one row and one column")]
    EmptyGrid,
}

pub type Result<T> = std::result::Result<T, Error>;
