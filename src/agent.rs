//! The decision-making player: observe a reveal, infer, pick the next move.

use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::knowledge::KnowledgeBase;
use crate::sentence::Sentence;
use crate::types::{Cell, NeighborCache};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

/// Minesweeper player backed by a [`KnowledgeBase`].
///
/// One agent plays one game. Call [`add_knowledge`](Agent::add_knowledge)
/// after each safe reveal, then prefer [`safe_move`](Agent::safe_move) and
/// fall back to [`random_move`](Agent::random_move).
#[derive(Debug, Clone)]
pub struct Agent {
    neighbors: NeighborCache,
    moves_made: BTreeSet<Cell>,
    knowledge: KnowledgeBase,
}

impl Agent {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            neighbors: NeighborCache::new(height, width),
            moves_made: BTreeSet::new(),
            knowledge: KnowledgeBase::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.height, config.width))
    }

    pub fn height(&self) -> usize {
        self.neighbors.height()
    }

    pub fn width(&self) -> usize {
        self.neighbors.width()
    }

    pub fn moves_made(&self) -> &BTreeSet<Cell> {
        &self.moves_made
    }

    pub fn known_mines(&self) -> &BTreeSet<Cell> {
        self.knowledge.mines()
    }

    pub fn known_safes(&self) -> &BTreeSet<Cell> {
        self.knowledge.safes()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Record that `cell` was revealed safe with `count` mines around it.
    ///
    /// The new sentence covers only the still-unknown neighbors; each
    /// known-mine neighbor is taken off `count`.
    pub fn add_knowledge(&mut self, cell: Cell, count: u8) -> Result<()> {
        if !self.neighbors.contains(cell) {
            return Err(Error::CellOutOfBounds {
                cell,
                height: self.height(),
                width: self.width(),
            });
        }
        let neighbors = self.neighbors.get(cell);
        if count as usize > neighbors.len() {
            return Err(Error::CountOutOfRange {
                cell,
                count,
                max: neighbors.len(),
            });
        }

        if self.knowledge.mines().contains(&cell) {
            return Err(Error::RevealedKnownMine { cell });
        }

        self.moves_made.insert(cell);
        self.knowledge.mark_safe(cell);

        let mut remaining = i32::from(count);
        let mut unknown = Vec::with_capacity(neighbors.len());
        for &n in neighbors {
            if self.moves_made.contains(&n) || self.knowledge.safes().contains(&n) {
                continue;
            }
            if self.knowledge.mines().contains(&n) {
                remaining -= 1;
                continue;
            }
            unknown.push(n);
        }

        debug!(%cell, count, unknown = unknown.len(), "knowledge added");
        if unknown.is_empty() {
            self.knowledge.infer();
        } else {
            self.knowledge.add_sentence(Sentence::new(unknown, remaining));
        }
        Ok(())
    }

    /// The first known-safe cell not yet played, in row-major order.
    pub fn safe_move(&self) -> Option<Cell> {
        self.knowledge
            .safes()
            .iter()
            .find(|cell| !self.moves_made.contains(cell))
            .copied()
    }

    /// A uniformly chosen cell that is neither played nor a known mine.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        let candidates: Vec<Cell> = self
            .neighbors
            .cells()
            .filter(|cell| !self.moves_made.contains(cell) && !self.knowledge.mines().contains(cell))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}
