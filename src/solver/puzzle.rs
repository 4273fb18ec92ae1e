//! One playable puzzle: a solution, its shuffled grid and a move budget

use super::builder::{build_with_rng, shuffle};
use crate::core::topology::{CELL_COUNT, is_swappable};
use crate::core::{FeedbackMatrix, Grid, Waffle, Word, diff};
use crate::error::{InputError, WaffleError};
use crate::path::{SearchMode, SwapPath, solve_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings for generating a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Random swaps applied to the solved grid
    pub swaps: usize,
    /// Player moves allowed before the puzzle is lost
    pub max_moves: usize,
    /// Seed for reproducible puzzles; `None` draws from the thread rng
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            swaps: 10,
            max_moves: 15,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    #[must_use]
    pub const fn with_swaps(mut self, swaps: usize) -> Self {
        self.swaps = swaps;
        self
    }

    #[must_use]
    pub const fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rng for this configuration, seeded when a seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// A puzzle in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    solution: Waffle,
    grid: Grid,
    feedback: FeedbackMatrix,
    moves_left: usize,
}

impl Puzzle {
    /// Start a puzzle from a known solution and shuffled grid
    ///
    /// # Errors
    /// Returns `InputError::LetterMismatch` if `shuffled` does not use the
    /// same letters as the solution.
    pub fn new(solution: Waffle, shuffled: Grid, max_moves: usize) -> Result<Self, InputError> {
        if shuffled.letter_counts() != solution.grid().letter_counts() {
            return Err(InputError::LetterMismatch);
        }
        Ok(Self {
            feedback: diff(solution.grid(), &shuffled),
            solution,
            grid: shuffled,
            moves_left: max_moves,
        })
    }

    /// Build and shuffle a fresh puzzle
    ///
    /// # Errors
    /// Returns `WaffleError::NotFound` if `words` cannot form a waffle.
    pub fn generate(words: &[Word], config: &PuzzleConfig) -> Result<Self, WaffleError> {
        let mut rng = config.rng();
        let solution = build_with_rng(words, &mut rng)?;
        let shuffled = shuffle(solution.grid(), config.swaps, &mut rng);
        log::debug!("generated puzzle {solution} with {} swaps", config.swaps);
        Ok(Self::new(solution, shuffled, config.max_moves)?)
    }

    /// Swap two cells, spending one move
    ///
    /// Once the budget is spent further swaps still apply but the counter
    /// stays at zero.
    ///
    /// # Errors
    /// Returns `InputError::NotSwappable` for a corner, the centre or an
    /// out-of-range cell, and `InputError::SameCell` when `a == b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<&FeedbackMatrix, InputError> {
        for cell in [a, b] {
            if cell >= CELL_COUNT || !is_swappable(cell) {
                return Err(InputError::NotSwappable(cell));
            }
        }
        if a == b {
            return Err(InputError::SameCell(a));
        }

        self.grid.swap(a, b);
        self.feedback = diff(self.solution.grid(), &self.grid);
        self.moves_left = self.moves_left.saturating_sub(1);
        Ok(&self.feedback)
    }

    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Waffle {
        &self.solution
    }

    /// Current letters, after any player swaps
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &FeedbackMatrix {
        &self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn moves_left(&self) -> usize {
        self.moves_left
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.feedback.is_solved()
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.moves_left == 0 && !self.is_won()
    }

    /// Shortest known swap sequence from the current grid to the solution
    ///
    /// # Errors
    /// Returns `WaffleError::Unreachable` if the pathfinder gives up.
    pub fn remaining_path(&self, mode: SearchMode) -> Result<SwapPath, WaffleError> {
        solve_path(&self.grid, self.solution.grid(), mode)
    }

    /// Next swap on the remaining path, `None` once solved
    ///
    /// # Errors
    /// Returns `WaffleError::Unreachable` if the pathfinder gives up.
    pub fn hint(&self) -> Result<Option<(usize, usize)>, WaffleError> {
        if self.is_won() {
            return Ok(None);
        }
        let path = self.remaining_path(SearchMode::default())?;
        Ok(path.swaps().first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROIL: &str = "BROILOAOASKEWREEDINER";

    fn broil() -> Waffle {
        Waffle::from_grid(BROIL.parse().unwrap()).unwrap()
    }

    fn puzzle(max_moves: usize) -> Puzzle {
        let solution = broil();
        let shuffled = solution.grid().swapped(1, 2).swapped(6, 19);
        Puzzle::new(solution, shuffled, max_moves).unwrap()
    }

    #[test]
    fn config_defaults_and_setters() {
        let config = PuzzleConfig::default();
        assert_eq!(config.swaps, 10);
        assert_eq!(config.max_moves, 15);
        assert_eq!(config.seed, None);

        let config = config.with_swaps(4).with_max_moves(6).with_seed(9);
        assert_eq!((config.swaps, config.max_moves, config.seed), (4, 6, Some(9)));
    }

    #[test]
    fn rejects_foreign_letters() {
        let shuffled: Grid = "XROILOAOASKEWREEDINER".parse().unwrap();
        assert_eq!(
            Puzzle::new(broil(), shuffled, 15),
            Err(InputError::LetterMismatch)
        );
    }

    #[test]
    fn rejects_invalid_swaps() {
        let mut game = puzzle(15);
        assert_eq!(game.swap(0, 1), Err(InputError::NotSwappable(0)));
        assert_eq!(game.swap(1, 10), Err(InputError::NotSwappable(10)));
        assert_eq!(game.swap(1, 21), Err(InputError::NotSwappable(21)));
        assert_eq!(game.swap(3, 3), Err(InputError::SameCell(3)));
        assert_eq!(game.moves_left(), 15);
    }

    #[test]
    fn solving_wins_the_puzzle() {
        let mut game = puzzle(15);
        assert!(!game.is_won());

        game.swap(1, 2).unwrap();
        assert_eq!(game.moves_left(), 14);
        assert!(!game.is_won());

        let feedback = game.swap(6, 19).unwrap();
        assert!(feedback.is_solved());
        assert!(game.is_won());
        assert!(!game.is_lost());
        assert_eq!(game.hint().unwrap(), None);
    }

    #[test]
    fn running_out_of_moves_loses() {
        let mut game = puzzle(1);
        game.swap(3, 5).unwrap();
        assert_eq!(game.moves_left(), 0);
        assert!(game.is_lost());

        game.swap(3, 5).unwrap();
        assert_eq!(game.moves_left(), 0);
    }

    #[test]
    fn hint_leads_towards_solution() {
        let mut game = puzzle(15);
        let (a, b) = game.hint().unwrap().unwrap();
        let before = game.feedback().count_exact();
        game.swap(a, b).unwrap();
        assert_eq!(game.feedback().count_exact(), before + 2);
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        use crate::wordlists::{WORDS, loader::words_from_slice};

        let words = words_from_slice(WORDS);
        let config = PuzzleConfig::default().with_seed(42).with_swaps(6);
        let first = Puzzle::generate(&words, &config).unwrap();
        let second = Puzzle::generate(&words, &config).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_won());
        assert_eq!(first.moves_left(), 15);
    }
}
