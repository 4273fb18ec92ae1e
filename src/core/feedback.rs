//! Waffle feedback calculation and representation
//!
//! Each active cell of a shuffled grid is classified against the solved grid:
//! - 0 = Exact (right letter, right cell)
//! - 1 = Misplaced (letter belongs elsewhere on this cell's row or column)
//! - 2 = Absent (no unclaimed occurrence on this cell's lines)
//!
//! The text form is those 21 digits in cell order.

use super::grid::{BLANK, Grid, for_each_cell};
use super::topology::{CELL_COUNT, Coord, GRID_SIZE, SLOTS, cell_at, placements};
use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Classification of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Feedback {
    Exact = 0,
    Misplaced = 1,
    Absent = 2,
}

impl Feedback {
    /// Digit used in the text form
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => '0',
            Self::Misplaced => '1',
            Self::Absent => '2',
        }
    }

    /// Parse a digit of the text form
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Self::Exact),
            '1' => Some(Self::Misplaced),
            '2' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for every active cell of a grid
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackMatrix([Feedback; CELL_COUNT]);

impl FeedbackMatrix {
    /// Every cell exact
    pub const SOLVED: Self = Self([Feedback::Exact; CELL_COUNT]);

    /// Calculate the feedback of `shuffled` against the `solved` grid
    ///
    /// This implements the duplicate-letter accounting of the puzzle: a
    /// letter of the solved grid can justify at most one exact or misplaced
    /// mark.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact cells and remove them from the reference pool
    /// 2. Second pass, in cell order: look for the letter among unclaimed
    ///    reference cells of the row slot, then the column slot; claim the
    ///    first hit and mark misplaced, otherwise mark absent
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::{FeedbackMatrix, Grid};
    ///
    /// let solved: Grid = "BROILOAOASKEWREEDINER".parse().unwrap();
    /// let shuffled: Grid = "BORILOAOASKEWREEDINER".parse().unwrap();
    /// let feedback = FeedbackMatrix::calculate(&solved, &shuffled);
    ///
    /// assert_eq!(feedback.to_string(), "011000000000000000000");
    /// ```
    #[must_use]
    pub fn calculate(solved: &Grid, shuffled: &Grid) -> Self {
        let mut result = [Feedback::Absent; CELL_COUNT];
        let mut reference: [Option<u8>; CELL_COUNT] = solved.letters().map(Some);

        // First pass: exact matches
        for cell in 0..CELL_COUNT {
            if shuffled.letter(cell) == solved.letter(cell) {
                result[cell] = Feedback::Exact;
                reference[cell] = None;
            }
        }

        // Second pass: misplaced letters, claimed from the remaining pool
        for cell in 0..CELL_COUNT {
            if result[cell] == Feedback::Exact {
                continue;
            }
            let letter = shuffled.letter(cell);
            let hit = placements(cell).iter().find_map(|placement| {
                SLOTS[placement.slot]
                    .iter()
                    .copied()
                    .find(|&other| reference[other] == Some(letter))
            });
            if let Some(other) = hit {
                reference[other] = None;
                result[cell] = Feedback::Misplaced;
            }
        }

        Self(result)
    }

    /// Wrap already computed classifications
    #[must_use]
    pub const fn new(cells: [Feedback; CELL_COUNT]) -> Self {
        Self(cells)
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, cell: usize) -> Feedback {
        self.0[cell]
    }

    /// Feedback at a grid coordinate, `None` for holes
    #[must_use]
    pub fn at(&self, coord: Coord) -> Option<Feedback> {
        cell_at(coord).map(|cell| self.0[cell])
    }

    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Feedback; CELL_COUNT] {
        &self.0
    }

    /// Number of cells with the given classification
    #[must_use]
    pub fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    #[inline]
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Feedback::Exact)
    }

    /// Check if every cell is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Parse the 5×5 text form of digits, holes as blanks
    ///
    /// # Errors
    /// Returns an `InputError` for malformed rows, misplaced blanks or
    /// characters other than `0`, `1` and `2`.
    pub fn from_rows(rows: &[&str]) -> Result<Self, InputError> {
        let mut cells = [Feedback::Absent; CELL_COUNT];
        for_each_cell(rows, |coord, ch| {
            let position = coord.row * GRID_SIZE + coord.col;
            let kind = Feedback::from_code(ch).ok_or(InputError::InvalidCharacter { ch, position })?;
            if let Some(cell) = cell_at(coord) {
                cells[cell] = kind;
            }
            Ok(())
        })?;
        Ok(Self(cells))
    }

    /// 5×5 text form, holes rendered as blanks
    #[must_use]
    pub fn rows(&self) -> [String; GRID_SIZE] {
        std::array::from_fn(|row| {
            (0..GRID_SIZE)
                .map(|col| self.at(Coord::new(row, col)).map_or(BLANK, Feedback::code))
                .collect()
        })
    }
}

/// Feedback of `shuffled` against `solved`
#[must_use]
pub fn diff(solved: &Grid, shuffled: &Grid) -> FeedbackMatrix {
    FeedbackMatrix::calculate(solved, shuffled)
}

impl FromStr for FeedbackMatrix {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(InputError::InvalidLength {
                expected: CELL_COUNT,
                actual: chars.len(),
            });
        }

        let mut cells = [Feedback::Absent; CELL_COUNT];
        for (position, (&ch, cell)) in chars.iter().zip(cells.iter_mut()).enumerate() {
            *cell = Feedback::from_code(ch).ok_or(InputError::InvalidCharacter { ch, position })?;
        }
        Ok(Self(cells))
    }
}

impl fmt::Display for FeedbackMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.0 {
            write!(f, "{}", kind.code())?;
        }
        Ok(())
    }
}

impl fmt::Debug for FeedbackMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeedbackMatrix({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "BROILOAOASKEWREEDINER";

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    fn misplaced_cells(feedback: &FeedbackMatrix) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&cell| feedback.get(cell) == Feedback::Misplaced)
            .collect()
    }

    #[test]
    fn feedback_against_itself_is_solved() {
        let solved = grid(SOLVED);
        let feedback = diff(&solved, &solved);
        assert!(feedback.is_solved());
        assert_eq!(feedback.count_exact(), CELL_COUNT);
    }

    #[test]
    fn counts_always_total_cell_count() {
        let solved = grid(SOLVED);
        let shuffled = grid("BESOLIEENIKOAREADWROR");
        let feedback = diff(&solved, &shuffled);
        let total = feedback.count(Feedback::Exact)
            + feedback.count(Feedback::Misplaced)
            + feedback.count(Feedback::Absent);
        assert_eq!(total, CELL_COUNT);
    }

    #[test]
    fn swap_in_one_row_is_misplaced_twice() {
        // R and O of BROIL exchanged
        let solved = grid(SOLVED);
        let shuffled = solved.swapped(1, 2);
        let feedback = diff(&solved, &shuffled);
        assert_eq!(misplaced_cells(&feedback), vec![1, 2]);
        assert_eq!(feedback.count_exact(), 19);
    }

    #[test]
    fn letter_from_another_line_is_absent() {
        // W of ASKEW and R of BROIL exchanged
        let solved = grid(SOLVED);
        let shuffled = solved.swapped(1, 12);
        let feedback = diff(&solved, &shuffled);
        // Row 0 has no W
        assert_eq!(feedback.get(1), Feedback::Absent);
        // Row 2 has no R, and the R of LOWER is already exact
        assert_eq!(feedback.get(12), Feedback::Absent);
    }

    #[test]
    fn one_reference_letter_justifies_one_mark() {
        // Solved row 0 has a single O; shuffled row 0 holds two O's that are
        // both out of place. Only the first may be misplaced.
        let solved = grid("ABOCDFGHEEEEEKLMNNNNN");
        let shuffled = grid("AOCOEFGHEEEEEKLMNNNNN");
        let feedback = diff(&solved, &shuffled);

        assert_eq!(feedback.get(1), Feedback::Misplaced);
        assert_eq!(feedback.get(3), Feedback::Absent);
        let misplaced_o: Vec<usize> = misplaced_cells(&feedback)
            .into_iter()
            .filter(|&cell| shuffled.letter(cell) == b'O')
            .collect();
        assert_eq!(misplaced_o, vec![1]);
    }

    #[test]
    fn repeated_reference_letter_and_single_guess() {
        // Solved row 0 holds two A's; shuffled row 0 holds one misplaced A.
        // Exactly one cell is marked misplaced for it.
        let solved = grid("BAXAYCDEFFFFFGHIJJJJJ");
        let shuffled = grid("BXAYQCDEFFFFFGHIJJJJJ");
        let feedback = diff(&solved, &shuffled);

        let misplaced_a: Vec<usize> = misplaced_cells(&feedback)
            .into_iter()
            .filter(|&cell| shuffled.letter(cell) == b'A')
            .collect();
        assert_eq!(misplaced_a, vec![2]);
    }

    #[test]
    fn exact_match_consumes_reference() {
        // Solved row 0 = ABCDE with a single B. Shuffled keeps B in place and
        // puts a second B at cell 3, which must not reuse the exact B.
        let solved = grid("ABCDEFGHIJKLMNOPQRSTU");
        let shuffled = grid("ABCBEFGHIJKLMNOPQRSTU");
        let feedback = diff(&solved, &shuffled);
        assert_eq!(feedback.get(1), Feedback::Exact);
        assert_eq!(feedback.get(3), Feedback::Absent);
    }

    #[test]
    fn intersection_falls_back_to_column_pool() {
        // Cell 0 lies on row 0 and column 0. The O of row 0 is exact, so the
        // O moved into cell 0 is only found through column 0.
        let solved = grid(SOLVED);
        let shuffled = solved.swapped(0, 5);
        let feedback = diff(&solved, &shuffled);
        assert_eq!(feedback.get(0), Feedback::Misplaced);
        assert_eq!(feedback.get(5), Feedback::Misplaced);
        assert_eq!(feedback.count_exact(), 19);
    }

    #[test]
    fn string_forms_round_trip() {
        let code = "022001221102222202120";
        let feedback: FeedbackMatrix = code.parse().unwrap();
        assert_eq!(feedback.to_string(), code);

        let rows = feedback.rows();
        assert_eq!(rows[0], "02200");
        assert_eq!(rows[1], "1 2 2");
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        assert_eq!(FeedbackMatrix::from_rows(&refs).unwrap(), feedback);
    }

    #[test]
    fn parse_rejects_bad_codes() {
        assert!("0123".parse::<FeedbackMatrix>().is_err());
        assert_eq!(
            "02200122110222220212X".parse::<FeedbackMatrix>(),
            Err(InputError::InvalidCharacter {
                ch: 'X',
                position: 20
            })
        );
        assert_eq!(
            FeedbackMatrix::from_rows(&["00000", "03000", "00000", "0 0 0", "00000"]),
            Err(InputError::ExpectedBlank { row: 1, col: 1 })
        );
    }
}
