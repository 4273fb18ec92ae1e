//! Letter grids and solved waffles
//!
//! A [`Grid`] holds the 21 active letters in reading order. Its string form
//! is those letters concatenated, which is exactly what `Display` prints and
//! `FromStr` parses:
//!
//! ```text
//! B R O I L
//! O   A   O
//! A S K E W   =>  "BROILOAOASKEWREEDINER"
//! R   E   E
//! D I N E R
//! ```

use super::letters::LetterCounts;
use super::topology::{
    CELL_COUNT, Coord, GRID_SIZE, SLOT_COUNT, SLOTS, cell_at, is_blank, placements,
};
use super::word::{WORD_LEN, Word};
use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Character used for the four holes in the 5×5 text form
pub const BLANK: char = ' ';

/// The 21 letters of a waffle, shuffled or solved
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grid([u8; CELL_COUNT]);

impl Grid {
    /// Build a grid from raw letters, validating each one
    ///
    /// # Errors
    /// Returns `InputError::InvalidCharacter` for anything outside A-Z.
    pub fn from_letters(letters: [u8; CELL_COUNT]) -> Result<Self, InputError> {
        if let Some(position) = letters.iter().position(|b| !b.is_ascii_uppercase()) {
            return Err(InputError::InvalidCharacter {
                ch: char::from(letters[position]),
                position,
            });
        }
        Ok(Self(letters))
    }

    /// Wrap letters already known to be uppercase ASCII
    pub(crate) const fn from_letters_unchecked(letters: [u8; CELL_COUNT]) -> Self {
        Self(letters)
    }

    /// Parse the 5×5 text form, one string per row
    ///
    /// Rows must be exactly five characters wide, and the holes must hold
    /// [`BLANK`]. Letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns an `InputError` describing the first malformed row or cell.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::Grid;
    ///
    /// let grid = Grid::from_rows(&["broil", "o a o", "askew", "r e e", "diner"]).unwrap();
    /// assert_eq!(grid.to_string(), "BROILOAOASKEWREEDINER");
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, InputError> {
        let mut letters = [0u8; CELL_COUNT];
        for_each_cell(rows, |coord, ch| {
            let Some(cell) = cell_at(coord) else {
                return Ok(());
            };
            if !ch.is_ascii_alphabetic() {
                return Err(InputError::InvalidCharacter {
                    ch,
                    position: coord.row * GRID_SIZE + coord.col,
                });
            }
            letters[cell] = ch.to_ascii_uppercase() as u8;
            Ok(())
        })?;
        Ok(Self(letters))
    }

    /// Lay six slot words into a grid
    ///
    /// # Errors
    /// Returns `InputError::IntersectionMismatch` when two crossing words
    /// disagree on their shared cell.
    pub fn from_words(words: &[Word; SLOT_COUNT]) -> Result<Self, InputError> {
        let mut letters = [0u8; CELL_COUNT];
        for (slot, word) in words.iter().enumerate() {
            for (offset, &cell) in SLOTS[slot].iter().enumerate() {
                let letter = word.letter_at(offset);
                if letters[cell] != 0 && letters[cell] != letter {
                    return Err(InputError::IntersectionMismatch { cell });
                }
                letters[cell] = letter;
            }
        }
        Ok(Self(letters))
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; CELL_COUNT] {
        &self.0
    }

    /// Letter of an active cell
    ///
    /// # Panics
    /// Panics if `cell >= CELL_COUNT`
    #[inline]
    #[must_use]
    pub const fn letter(&self, cell: usize) -> u8 {
        self.0[cell]
    }

    /// Letter at a grid coordinate, `None` for holes
    #[must_use]
    pub fn at(&self, coord: Coord) -> Option<u8> {
        cell_at(coord).map(|cell| self.0[cell])
    }

    /// Word currently spelled by a slot
    #[must_use]
    pub fn slot_word(&self, slot: usize) -> Word {
        let mut letters = [0u8; WORD_LEN];
        for (letter, &cell) in letters.iter_mut().zip(&SLOTS[slot]) {
            *letter = self.0[cell];
        }
        Word::from_letters(letters)
    }

    /// Words spelled by all six slots
    #[must_use]
    pub fn words(&self) -> [Word; SLOT_COUNT] {
        std::array::from_fn(|slot| self.slot_word(slot))
    }

    /// Exchange the letters of two cells
    pub fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// Copy of the grid with two letters exchanged
    #[must_use]
    pub fn swapped(mut self, a: usize, b: usize) -> Self {
        self.0.swap(a, b);
        self
    }

    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        self.0.iter().copied().collect()
    }

    /// View the grid as its 21-character string
    ///
    /// # Panics
    /// Will not panic - letters are validated ASCII on construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("letters are validated ASCII")
    }

    /// 5×5 text form, holes rendered as [`BLANK`]
    #[must_use]
    pub fn rows(&self) -> [String; GRID_SIZE] {
        std::array::from_fn(|row| {
            (0..GRID_SIZE)
                .map(|col| self.at(Coord::new(row, col)).map_or(BLANK, char::from))
                .collect()
        })
    }
}

impl FromStr for Grid {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(InputError::InvalidLength {
                expected: CELL_COUNT,
                actual: chars.len(),
            });
        }

        let mut letters = [0u8; CELL_COUNT];
        for (position, (&ch, slot)) in chars.iter().zip(letters.iter_mut()).enumerate() {
            if !ch.is_ascii_alphabetic() {
                return Err(InputError::InvalidCharacter { ch, position });
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }
        Ok(Self(letters))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.as_str())
    }
}

/// Walk the 5×5 text form, checking row shape and hole placement
///
/// `visit` is called for every non-hole cell with its character.
pub(crate) fn for_each_cell(
    rows: &[&str],
    mut visit: impl FnMut(Coord, char) -> Result<(), InputError>,
) -> Result<(), InputError> {
    if rows.len() != GRID_SIZE {
        return Err(InputError::InvalidRowCount(rows.len()));
    }

    for (row, text) in rows.iter().enumerate() {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != GRID_SIZE {
            return Err(InputError::InvalidLength {
                expected: GRID_SIZE,
                actual: chars.len(),
            });
        }
        for (col, &ch) in chars.iter().enumerate() {
            let coord = Coord::new(row, col);
            match (is_blank(coord), ch == BLANK) {
                (true, true) => {}
                (true, false) => return Err(InputError::ExpectedBlank { row, col }),
                (false, true) => return Err(InputError::UnexpectedBlank { row, col }),
                (false, false) => visit(coord, ch)?,
            }
        }
    }
    Ok(())
}

/// A solved puzzle: six distinct words whose crossings agree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Waffle {
    words: [Word; SLOT_COUNT],
    grid: Grid,
}

impl Waffle {
    /// Validate six slot words as a complete waffle
    ///
    /// # Errors
    /// Returns `InputError::IntersectionMismatch` when crossing words
    /// disagree, or `InputError::DuplicateWord` when a word repeats.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::{Waffle, Word};
    ///
    /// let words = ["oaken", "askew", "broil", "lower", "diner", "board"]
    ///     .map(|w| Word::new(w).unwrap());
    /// let waffle = Waffle::new(words).unwrap();
    /// assert_eq!(waffle.grid().to_string(), "BROILOAOASKEWREEDINER");
    /// ```
    pub fn new(words: [Word; SLOT_COUNT]) -> Result<Self, InputError> {
        for (i, word) in words.iter().enumerate() {
            if words[..i].contains(word) {
                return Err(InputError::DuplicateWord(word.to_string()));
            }
        }
        let grid = Grid::from_words(&words)?;
        Ok(Self { words, grid })
    }

    /// Pair words with the grid they spell, already known to be valid
    pub(crate) const fn from_parts(words: [Word; SLOT_COUNT], grid: Grid) -> Self {
        Self { words, grid }
    }

    /// Read the six slot words back out of a full grid
    ///
    /// # Errors
    /// Returns `InputError::DuplicateWord` if two slots spell the same word.
    pub fn from_grid(grid: Grid) -> Result<Self, InputError> {
        Self::new(grid.words())
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[Word; SLOT_COUNT] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// True if every crossing of the grid agrees with both of its words
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        (0..CELL_COUNT).all(|cell| {
            placements(cell)
                .iter()
                .all(|p| self.words[p.slot].letter_at(p.offset) == self.grid.letter(cell))
        })
    }
}

impl fmt::Display for Waffle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = self.words.iter().map(Word::as_str).collect();
        f.write_str(&words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROIL: &str = "BROILOAOASKEWREEDINER";

    fn broil_words() -> [Word; SLOT_COUNT] {
        ["OAKEN", "ASKEW", "BROIL", "LOWER", "DINER", "BOARD"].map(|w| Word::new(w).unwrap())
    }

    #[test]
    fn string_round_trip() {
        let grid: Grid = BROIL.parse().unwrap();
        assert_eq!(grid.to_string(), BROIL);

        let lower: Grid = BROIL.to_lowercase().parse().unwrap();
        assert_eq!(lower, grid);
    }

    #[test]
    fn parse_rejects_bad_strings() {
        assert_eq!(
            "BROIL".parse::<Grid>(),
            Err(InputError::InvalidLength {
                expected: 21,
                actual: 5
            })
        );
        assert_eq!(
            "BROILOAOASKEWREEDINE1".parse::<Grid>(),
            Err(InputError::InvalidCharacter {
                ch: '1',
                position: 20
            })
        );
    }

    #[test]
    fn words_to_grid_string() {
        let words = ["AATUE", "ELTBV", "ROAAL", "LOVIN", "TIEIN", "RAENT"]
            .map(|w| Word::new(w).unwrap());
        let grid = Grid::from_words(&words).unwrap();
        assert_eq!(grid.to_string(), "ROAALAAOELTBVNUITIEIN");
        assert_eq!(grid.words(), words);
    }

    #[test]
    fn rows_round_trip() {
        let grid: Grid = BROIL.parse().unwrap();
        let rows = grid.rows();
        assert_eq!(rows[0], "BROIL");
        assert_eq!(rows[1], "O A O");
        assert_eq!(rows[3], "R E E");

        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        assert_eq!(Grid::from_rows(&refs).unwrap(), grid);
    }

    #[test]
    fn from_rows_checks_shape() {
        assert_eq!(
            Grid::from_rows(&["BROIL", "OXAXO", "ASKEW", "R E E", "DINER"]),
            Err(InputError::ExpectedBlank { row: 1, col: 1 })
        );
        assert_eq!(
            Grid::from_rows(&["BR IL", "O A O", "ASKEW", "R E E", "DINER"]),
            Err(InputError::UnexpectedBlank { row: 0, col: 2 })
        );
        assert_eq!(
            Grid::from_rows(&["BROIL"]),
            Err(InputError::InvalidRowCount(1))
        );
    }

    #[test]
    fn from_words_detects_mismatch() {
        let mut words = broil_words();
        words[5] = Word::new("COARD").unwrap();
        assert_eq!(
            Grid::from_words(&words),
            Err(InputError::IntersectionMismatch { cell: 0 })
        );
    }

    #[test]
    fn waffle_rejects_duplicates() {
        let word = Word::new("ABCDE").unwrap();
        assert_eq!(
            Waffle::new([word; SLOT_COUNT]),
            Err(InputError::DuplicateWord("ABCDE".to_string()))
        );
    }

    #[test]
    fn waffle_from_grid_matches_words() {
        let waffle = Waffle::new(broil_words()).unwrap();
        assert!(waffle.is_consistent());
        assert_eq!(Waffle::from_grid(*waffle.grid()).unwrap(), waffle);
        assert_eq!(waffle.to_string(), "OAKEN ASKEW BROIL LOWER DINER BOARD");
    }

    #[test]
    fn swap_exchanges_letters() {
        let grid: Grid = BROIL.parse().unwrap();
        let swapped = grid.swapped(1, 2);
        assert_eq!(swapped.letter(1), b'O');
        assert_eq!(swapped.letter(2), b'R');
        assert_eq!(swapped.letter_counts(), grid.letter_counts());
    }
}
