//! Knowledge base: active sentences plus the cells proven safe or mined.
//!
//! All sentences are owned by value in one `Vec`. Marking a cell walks that
//! collection and mutates each sentence in place. Inference runs to a fixed
//! point with two rules:
//! - Resolution: a sentence with `count == 0` or `count == len` decides all
//!   of its cells.
//! - Subset inference: if `A ⊂ B` then `B - A` holds `B.count - A.count`
//!   mines.

use crate::sentence::Sentence;
use crate::types::Cell;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    sentences: Vec<Sentence>,
    mines: BTreeSet<Cell>,
    safes: BTreeSet<Cell>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    pub fn safes(&self) -> &BTreeSet<Cell> {
        &self.safes
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn is_known(&self, cell: Cell) -> bool {
        self.mines.contains(&cell) || self.safes.contains(&cell)
    }

    pub fn contains(&self, sentence: &Sentence) -> bool {
        self.sentences.contains(sentence)
    }

    /// Record `cell` as a mine and remove it from every sentence.
    ///
    /// Ignored if `cell` is already known safe.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.safes.contains(&cell) {
            warn!(%cell, "contradiction: known safe cell marked as mine");
            return;
        }
        self.mines.insert(cell);
        for sentence in &mut self.sentences {
            sentence.mark_mine(cell);
        }
    }

    /// Record `cell` as safe and remove it from every sentence.
    ///
    /// Ignored if `cell` is already a known mine.
    pub fn mark_safe(&mut self, cell: Cell) {
        if self.mines.contains(&cell) {
            warn!(%cell, "contradiction: known mine marked as safe");
            return;
        }
        self.safes.insert(cell);
        for sentence in &mut self.sentences {
            sentence.mark_safe(cell);
        }
    }

    /// Add a sentence and run inference to closure.
    ///
    /// Cells already known are stripped first. An empty or duplicate
    /// sentence contributes nothing but inference still runs.
    pub fn add_sentence(&mut self, mut sentence: Sentence) {
        for &cell in &self.mines {
            sentence.mark_mine(cell);
        }
        for &cell in &self.safes {
            sentence.mark_safe(cell);
        }
        if self.insert(sentence) {
            debug!(sentences = self.sentences.len(), "sentence added");
        }
        self.infer();
    }

    /// Run the closure loop until a full pass changes nothing.
    pub fn infer(&mut self) {
        self.dedup();
        let mut passes = 0usize;

        loop {
            passes += 1;
            let mut changed = false;

            // Resolution
            let mut new_mines = BTreeSet::new();
            let mut new_safes = BTreeSet::new();
            for sentence in &self.sentences {
                new_mines.extend(sentence.known_mines());
                new_safes.extend(sentence.known_safes());
            }
            for cell in new_mines {
                if self.safes.contains(&cell) {
                    warn!(%cell, "contradiction: known safe cell deduced as mine");
                } else if !self.mines.contains(&cell) {
                    debug!(%cell, "deduced mine");
                    self.mark_mine(cell);
                    changed = true;
                }
            }
            for cell in new_safes {
                if self.mines.contains(&cell) {
                    warn!(%cell, "contradiction: known mine deduced as safe");
                } else if !self.safes.contains(&cell) {
                    debug!(%cell, "deduced safe");
                    self.mark_safe(cell);
                    changed = true;
                }
            }

            self.sentences.retain(|s| !s.is_empty());
            self.dedup();

            // Subset inference
            let mut derived = Vec::new();
            for (i, a) in self.sentences.iter().enumerate() {
                for (j, b) in self.sentences.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    if let Some(inferred) = b.difference(a) {
                        if !self.contains(&inferred) && !derived.contains(&inferred) {
                            derived.push(inferred);
                        }
                    }
                }
            }
            for inferred in derived {
                debug!(sentence = %inferred, "inferred");
                self.sentences.push(inferred);
                changed = true;
            }

            if !changed {
                break;
            }
        }

        debug!(
            passes,
            sentences = self.sentences.len(),
            mines = self.mines.len(),
            safes = self.safes.len(),
            "inference closed"
        );
    }

    /// Push unless empty or already present. Returns whether it was added.
    fn insert(&mut self, sentence: Sentence) -> bool {
        if sentence.is_empty() || self.contains(&sentence) {
            return false;
        }
        self.sentences.push(sentence);
        true
    }

    /// Marks can collapse two sentences into the same one; keep the first.
    fn dedup(&mut self) {
        let mut seen = HashSet::with_capacity(self.sentences.len());
        self.sentences.retain(|s| seen.insert(s.clone()));
    }
}
