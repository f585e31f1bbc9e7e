//! A single logical constraint: "exactly `count` of these cells are mines".

use crate::types::Cell;
use std::collections::BTreeSet;
use std::fmt;

/// An unordered set of cells plus the number of mines among them.
///
/// Equality and hashing compare the cell set and the count, independent of
/// construction order. A negative count only arises from contradictory input
/// and such a sentence never resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence {
    cells: BTreeSet<Cell>,
    count: i32,
}

impl Sentence {
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: i32) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    #[inline(always)]
    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    #[inline(always)]
    pub fn count(&self) -> i32 {
        self.count
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_subset(&self, other: &Sentence) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// All cells, if every remaining cell must be a mine.
    pub fn known_mines(&self) -> BTreeSet<Cell> {
        if self.count > 0 && self.count as usize == self.cells.len() {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// All cells, if no remaining cell can be a mine.
    pub fn known_safes(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Drop `cell` and account for its mine. No-op if absent.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count -= 1;
        }
    }

    /// Drop `cell`. No-op if absent.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// `self - subset`: the cells only `self` mentions and the mines among them.
    ///
    /// Returns `None` unless `subset` is contained in `self` and leaves at
    /// least one cell behind.
    pub fn difference(&self, subset: &Sentence) -> Option<Sentence> {
        if subset.len() >= self.len() || !subset.is_subset(self) {
            return None;
        }
        Some(Sentence {
            cells: self.cells.difference(&subset.cells).copied().collect(),
            count: self.count - subset.count,
        })
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}} = {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn test_zero_count_is_all_safe() {
        let s = Sentence::new([c(0, 0), c(0, 1), c(0, 2)], 0);
        assert_eq!(s.known_safes(), BTreeSet::from([c(0, 0), c(0, 1), c(0, 2)]));
        assert!(s.known_mines().is_empty());
    }

    #[test]
    fn test_full_count_is_all_mines() {
        let s = Sentence::new([c(0, 0), c(0, 1)], 2);
        assert_eq!(s.known_mines(), BTreeSet::from([c(0, 0), c(0, 1)]));
        assert!(s.known_safes().is_empty());
    }

    #[test]
    fn test_partial_count_is_unresolved() {
        let s = Sentence::new([c(0, 0), c(0, 1), c(1, 1)], 1);
        assert!(s.known_mines().is_empty());
        assert!(s.known_safes().is_empty());
    }

    #[test]
    fn test_empty_sentence_reports_nothing_as_mine() {
        let s = Sentence::new([], 0);
        assert!(s.known_mines().is_empty());
        assert!(s.known_safes().is_empty());
    }

    #[test]
    fn test_negative_count_never_resolves() {
        let s = Sentence::new([c(0, 0)], -1);
        assert!(s.known_mines().is_empty());
        assert!(s.known_safes().is_empty());
    }

    #[test]
    fn test_mark_mine_decrements() {
        let mut s = Sentence::new([c(0, 0), c(0, 1), c(0, 2)], 1);
        s.mark_mine(c(0, 0));
        assert_eq!(s, Sentence::new([c(0, 1), c(0, 2)], 0));
        assert_eq!(s.known_safes(), BTreeSet::from([c(0, 1), c(0, 2)]));

        // Absent cell is a no-op
        s.mark_mine(c(5, 5));
        assert_eq!(s.count(), 0);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_mark_safe_keeps_count() {
        let mut s = Sentence::new([c(0, 0), c(0, 1)], 1);
        s.mark_safe(c(0, 1));
        assert_eq!(s, Sentence::new([c(0, 0)], 1));
        assert_eq!(s.known_mines(), BTreeSet::from([c(0, 0)]));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Sentence::new([c(0, 0), c(1, 1)], 1);
        let b = Sentence::new([c(1, 1), c(0, 0), c(1, 1)], 1);
        assert_eq!(a, b);
        assert_ne!(a, Sentence::new([c(0, 0), c(1, 1)], 2));
    }

    #[test]
    fn test_difference() {
        let small = Sentence::new([c(0, 0), c(0, 1), c(0, 2)], 1);
        let big = Sentence::new([c(0, 0), c(0, 1), c(0, 2), c(1, 0), c(1, 1)], 2);
        assert_eq!(big.difference(&small), Some(Sentence::new([c(1, 0), c(1, 1)], 1)));
        assert_eq!(small.difference(&big), None);
        assert_eq!(small.difference(&small), None);

        let disjoint = Sentence::new([c(3, 3)], 0);
        assert_eq!(big.difference(&disjoint), None);
    }

    #[test]
    fn test_display() {
        let s = Sentence::new([c(1, 0), c(0, 2)], 1);
        assert_eq!(s.to_string(), "{(0, 2), (1, 0)} = 1");
    }
}
