//! Five-letter word representation
//!
//! A Word stores its letters as uppercase ASCII bytes so that slots, cells
//! and letter sets can compare them without allocation.

use super::letters::{LetterCounts, LetterSet};
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the grid
pub const WORD_LEN: usize = 5;

/// Per-position admissible letters, one set per offset of a slot
pub type SlotMask = [LetterSet; WORD_LEN];

/// A validated, uppercase five-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::Word;
    ///
    /// let word = Word::new("broil").unwrap();
    /// assert_eq!(word.as_str(), "BROIL");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }

    /// Build a word from letters already known to be uppercase ASCII
    pub(crate) const fn from_letters(letters: [u8; WORD_LEN]) -> Self {
        Self(letters)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific offset (0-4)
    ///
    /// # Panics
    /// Panics if offset >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, offset: usize) -> u8 {
        self.0[offset]
    }

    /// View the word as a string slice
    ///
    /// # Panics
    /// Will not panic - letters are validated ASCII on construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("letters are validated ASCII")
    }

    /// Check the word against per-offset letter constraints
    ///
    /// This is the matching primitive shared by the builder and the
    /// constraint solver.
    #[inline]
    #[must_use]
    pub fn fits(&self, mask: &SlotMask) -> bool {
        self.0
            .iter()
            .zip(mask)
            .all(|(&letter, allowed)| allowed.contains(letter))
    }

    /// Count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        self.0.iter().copied().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("OAKEN").unwrap();
        assert_eq!(word.as_str(), "OAKEN");
        assert_eq!(word.letters(), b"OAKEN");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("diner").unwrap().as_str(), "DINER");
        assert_eq!(Word::new("DiNeR").unwrap(), Word::new("DINER").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("lower").unwrap();
        assert_eq!(word.letter_at(0), b'L');
        assert_eq!(word.letter_at(4), b'R');
    }

    #[test]
    fn word_fits_mask() {
        let word = Word::new("board").unwrap();
        let mut mask = [LetterSet::ALL; WORD_LEN];
        assert!(word.fits(&mask));

        mask[2] = LetterSet::single(b'A');
        assert!(word.fits(&mask));

        mask[0].remove(b'B');
        assert!(!word.fits(&mask));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("whiff").unwrap().letter_counts();
        assert_eq!(counts.get(b'F'), 2);
        assert_eq!(counts.get(b'W'), 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("askew").unwrap();
        assert_eq!(format!("{word}"), "ASKEW");
    }
}
