//! Core domain types for Waffle
//!
//! This module contains the fundamental domain types: grid geometry, words,
//! letter sets and feedback. Everything here is pure and deterministic.

mod feedback;
mod grid;
mod letters;
pub mod topology;
mod word;

pub use feedback::{Feedback, FeedbackMatrix, diff};
pub use grid::{BLANK, Grid, Waffle};
pub use letters::{LetterCounts, LetterSet};
pub use topology::{CELL_COUNT, Coord, GRID_SIZE, SLOT_COUNT};
pub use word::{SlotMask, WORD_LEN, Word, WordError};
