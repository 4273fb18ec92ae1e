//! Error types shared by the puzzle engine
//!
//! Every failure is surfaced as an explicit value. Search exhaustion is
//! [`WaffleError::NotFound`], malformed grids, strings and moves are
//! [`WaffleError::InvalidInput`], and a pathfinder that cannot reach its goal
//! reports [`WaffleError::Unreachable`].

use crate::core::WordError;
use thiserror::Error;

/// Top-level error for puzzle operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaffleError {
    /// Backtracking exhausted the word source without a valid completion
    #[error("no valid waffle could be found with the given words")]
    NotFound,

    /// Input was malformed and was rejected without coercion
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The swap search emptied its open set before reaching the goal
    #[error("the goal state cannot be reached by swapping letters")]
    Unreachable,
}

/// Details of a rejected input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("expected 5 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("cell ({row}, {col}) must be blank")]
    ExpectedBlank { row: usize, col: usize },

    #[error("cell ({row}, {col}) must not be blank")]
    UnexpectedBlank { row: usize, col: usize },

    #[error("crossing words disagree at cell {cell}")]
    IntersectionMismatch { cell: usize },

    #[error("word {0} is used more than once")]
    DuplicateWord(String),

    #[error("grids do not contain the same letters")]
    LetterMismatch,

    #[error("feedback does not match the letters and goal")]
    FeedbackMismatch,

    #[error("cell {0} cannot be swapped")]
    NotSwappable(usize),

    #[error("cannot swap cell {0} with itself")]
    SameCell(usize),

    #[error(transparent)]
    Word(#[from] WordError),
}

impl From<WordError> for WaffleError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(InputError::Word(err))
    }
}
