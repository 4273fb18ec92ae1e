//! Puzzle solving command
//!
//! Recovers the hidden words from a shuffled grid and its feedback, then
//! finds the swaps that reach them.

use crate::core::{FeedbackMatrix, Grid, Waffle, Word};
use crate::error::WaffleError;
use crate::path::{SearchMode, SwapPath, solve_path};
use crate::solver::infer;

/// Result of solving a shuffled grid
pub struct SolveResult {
    pub shuffled: Grid,
    pub feedback: FeedbackMatrix,
    pub solution: Waffle,
    pub path: SwapPath,
}

/// Infer the solution for `shuffled` and the swaps leading to it
///
/// # Errors
///
/// Returns `WaffleError::NotFound` if no waffle in `words` explains the
/// feedback, or `WaffleError::Unreachable` if the pathfinder fails.
pub fn solve_puzzle(
    words: &[Word],
    shuffled: Grid,
    feedback: FeedbackMatrix,
    mode: SearchMode,
) -> Result<SolveResult, WaffleError> {
    let solution = infer(words, &shuffled, &feedback)?;
    let path = solve_path(&shuffled, solution.grid(), mode)?;

    Ok(SolveResult {
        shuffled,
        feedback,
        solution,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diff;

    fn broil_words() -> Vec<Word> {
        ["OAKEN", "ASKEW", "BROIL", "LOWER", "DINER", "BOARD"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    #[test]
    fn solves_known_shuffle() {
        let solved: Grid = "BROILOAOASKEWREEDINER".parse().unwrap();
        let shuffled = solved.swapped(1, 2).swapped(6, 19);
        let feedback = diff(&solved, &shuffled);

        let result = solve_puzzle(&broil_words(), shuffled, feedback, SearchMode::Exhaustive).unwrap();
        assert_eq!(*result.solution.grid(), solved);
        assert_eq!(result.path.len(), 2);
        assert_eq!(result.path.states().last().unwrap().grid(), &solved);
    }

    #[test]
    fn unexplained_feedback_is_not_found() {
        let shuffled: Grid = "BROILOAOASKEWREEDINER".parse().unwrap();
        let feedback: FeedbackMatrix = "011000000000000000000".parse().unwrap();

        let result = solve_puzzle(&broil_words(), shuffled, feedback, SearchMode::default());
        assert!(matches!(result, Err(WaffleError::NotFound)));
    }
}
