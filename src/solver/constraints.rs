//! Letter constraints derived from a shuffled grid and its feedback
//!
//! Each cell starts out admitting every letter. Feedback then narrows the
//! sets in three passes, each allowed to overwrite the previous one:
//!
//! 1. An ABSENT letter cannot sit anywhere on the line(s) through its cell.
//! 2. A MISPLACED letter belongs somewhere else on its line(s), so it is
//!    re-admitted there and ruled out for its own cell.
//! 3. An EXACT cell admits only its current letter.
//!
//! Swaps never change the letter multiset, so the shuffled grid's letter
//! counts are also a hard ceiling for the solution.

use crate::core::topology::{SLOTS, line_cells};
use crate::core::{
    CELL_COUNT, Feedback, FeedbackMatrix, Grid, LetterCounts, LetterSet, SlotMask, Word,
};

/// Admissible letters per cell plus the global letter ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    allowed: [LetterSet; CELL_COUNT],
    ceiling: LetterCounts,
}

impl ConstraintSet {
    /// Derive constraints from a shuffled grid and its feedback
    #[must_use]
    pub fn from_feedback(shuffled: &Grid, feedback: &FeedbackMatrix) -> Self {
        let mut allowed = [LetterSet::ALL; CELL_COUNT];
        let cells_with = |kind: Feedback| (0..CELL_COUNT).filter(move |&c| feedback.get(c) == kind);

        for cell in cells_with(Feedback::Absent) {
            let letter = shuffled.letter(cell);
            for other in line_cells(cell) {
                allowed[other].remove(letter);
            }
        }

        for cell in cells_with(Feedback::Misplaced) {
            let letter = shuffled.letter(cell);
            for other in line_cells(cell).filter(|&other| other != cell) {
                allowed[other].insert(letter);
            }
            allowed[cell].remove(letter);
        }

        for cell in cells_with(Feedback::Exact) {
            allowed[cell] = LetterSet::single(shuffled.letter(cell));
        }

        Self {
            allowed,
            ceiling: shuffled.letter_counts(),
        }
    }

    /// Letters a cell may hold in the solution
    #[inline]
    #[must_use]
    pub const fn allowed(&self, cell: usize) -> LetterSet {
        self.allowed[cell]
    }

    /// Maximum number of times each letter may appear
    #[inline]
    #[must_use]
    pub const fn ceiling(&self) -> &LetterCounts {
        &self.ceiling
    }

    /// Admissible letters of a slot, one set per offset
    #[must_use]
    pub fn slot_mask(&self, slot: usize) -> SlotMask {
        SLOTS[slot].map(|cell| self.allowed[cell])
    }

    /// True if `word` fits the slot on its own
    #[must_use]
    pub fn admits(&self, slot: usize, word: &Word) -> bool {
        word.fits(&self.slot_mask(slot)) && word.letter_counts().fits_within(&self.ceiling)
    }

    /// Number of cells whose letter is fully determined
    #[must_use]
    pub fn fixed_cells(&self) -> usize {
        self.allowed.iter().filter(|set| set.len() == 1).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diff;

    const BROIL: &str = "BROILOAOASKEWREEDINER";

    fn constraints_for(a: usize, b: usize) -> (Grid, ConstraintSet) {
        let solved: Grid = BROIL.parse().unwrap();
        let shuffled = solved.swapped(a, b);
        let feedback = diff(&solved, &shuffled);
        (solved, ConstraintSet::from_feedback(&shuffled, &feedback))
    }

    #[test]
    fn solved_grid_fixes_every_cell() {
        let grid: Grid = BROIL.parse().unwrap();
        let constraints = ConstraintSet::from_feedback(&grid, &FeedbackMatrix::SOLVED);
        assert_eq!(constraints.fixed_cells(), CELL_COUNT);
        assert_eq!(constraints.ceiling(), &grid.letter_counts());
    }

    #[test]
    fn misplaced_letters_leave_their_own_cell() {
        let (_, constraints) = constraints_for(1, 2);

        assert_eq!(constraints.allowed(0), LetterSet::single(b'B'));
        assert!(!constraints.allowed(1).contains(b'O'));
        assert!(constraints.allowed(1).contains(b'R'));
        assert!(!constraints.allowed(2).contains(b'R'));
        assert!(constraints.allowed(2).contains(b'O'));
        assert_eq!(constraints.fixed_cells(), CELL_COUNT - 2);
    }

    #[test]
    fn absent_letters_leave_their_lines() {
        // W and R trade places across row 0 and column 4
        let (_, constraints) = constraints_for(1, 12);

        assert!(!constraints.allowed(1).contains(b'W'));
        assert!(constraints.allowed(1).contains(b'R'));
        assert!(!constraints.allowed(12).contains(b'R'));
        assert!(constraints.allowed(12).contains(b'W'));
        // Exact cells on the same lines keep their own letter
        assert_eq!(constraints.allowed(20), LetterSet::single(b'R'));
    }

    #[test]
    fn constraints_never_exclude_the_solution() {
        let solved: Grid = BROIL.parse().unwrap();
        for (a, b) in [(1, 2), (1, 12), (5, 13), (6, 19), (9, 17), (3, 14)] {
            let shuffled = solved.swapped(a, b);
            let constraints = ConstraintSet::from_feedback(&shuffled, &diff(&solved, &shuffled));
            for cell in 0..CELL_COUNT {
                assert!(constraints.allowed(cell).contains(solved.letter(cell)));
            }
            for slot in 0..SLOTS.len() {
                assert!(constraints.admits(slot, &solved.slot_word(slot)));
            }
        }
    }

    #[test]
    fn ceiling_rejects_overused_letters() {
        let (_, constraints) = constraints_for(1, 2);
        // BROIL has a single K
        let word = Word::new("KAKAS").unwrap();
        assert!(!word.letter_counts().fits_within(constraints.ceiling()));
        assert!(!constraints.admits(0, &word));
    }
}
