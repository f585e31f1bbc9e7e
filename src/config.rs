//! Game configuration shared by the board, the agent and the wasm entry points.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Grid size, mine count and an optional RNG seed.
///
/// Missing fields fall back to an 8x8 board with 8 mines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub mines: usize,
    /// Fixed seed for reproducible games; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            mines: 8,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(Error::EmptyGrid);
        }
        let cells = self.height * self.width;
        if self.mines > cells {
            return Err(Error::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        Ok(())
    }
}
