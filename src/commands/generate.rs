//! Puzzle generation command
//!
//! Builds a waffle, shuffles it and reports how many swaps undo the shuffle.

use crate::core::Word;
use crate::error::WaffleError;
use crate::path::SearchMode;
use crate::solver::{Puzzle, PuzzleConfig};

/// A freshly generated puzzle with its reference solution path
pub struct GenerateResult {
    pub puzzle: Puzzle,
    pub swaps_to_solve: usize,
}

/// Generate one puzzle from `words`
///
/// # Errors
///
/// Returns `WaffleError::NotFound` if the words cannot form a waffle, or
/// `WaffleError::Unreachable` if the pathfinder fails on the shuffle.
pub fn generate_puzzle(words: &[Word], config: &PuzzleConfig) -> Result<GenerateResult, WaffleError> {
    let puzzle = Puzzle::generate(words, config)?;
    let path = puzzle.remaining_path(SearchMode::default())?;

    Ok(GenerateResult {
        swaps_to_solve: path.len(),
        puzzle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    #[test]
    fn generated_puzzle_is_solvable() {
        let words = words_from_slice(WORDS);
        let config = PuzzleConfig::default().with_seed(5);
        let result = generate_puzzle(&words, &config).unwrap();

        assert!(!result.puzzle.is_won());
        // Sixteen swappable cells never need more than fifteen swaps
        assert!((1..16).contains(&result.swaps_to_solve));
    }

    #[test]
    fn empty_word_list_fails() {
        let result = generate_puzzle(&[], &PuzzleConfig::default().with_seed(1));
        assert!(matches!(result, Err(WaffleError::NotFound)));
    }
}
