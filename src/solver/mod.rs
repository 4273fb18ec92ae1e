//! Waffle construction and solving
//!
//! The builder and the constraint solver share one backtracking engine over
//! the six word slots. [`Puzzle`] ties a solution to a shuffled grid and a
//! move budget.

mod builder;
mod constraints;
mod infer;
mod puzzle;
mod search;

pub use builder::{build, build_with_rng, shuffle};
pub use constraints::ConstraintSet;
pub use infer::infer;
pub use puzzle::{Puzzle, PuzzleConfig};
