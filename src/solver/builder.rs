//! Grid construction and shuffling
//!
//! The builder fills the six slots in topology order, trying words in the
//! order they are given. Shuffling then scrambles the solved grid with
//! random swaps among the swappable cells.

use super::search::SlotSearch;
use crate::core::topology::SWAPPABLE;
use crate::core::{Grid, Waffle, Word};
use crate::error::WaffleError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Find a valid waffle, trying words in the given order
///
/// # Errors
/// Returns `WaffleError::NotFound` when no assignment of distinct words
/// satisfies every crossing, including when `words` is empty.
///
/// # Examples
/// ```
/// use waffle_solver::core::Word;
/// use waffle_solver::solver::build;
///
/// let words: Vec<Word> = ["board", "lower", "oaken", "diner", "askew", "broil"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let waffle = build(&words).unwrap();
/// assert_eq!(waffle.grid().to_string(), "BROILOAOASKEWREEDINER");
/// ```
pub fn build(words: &[Word]) -> Result<Waffle, WaffleError> {
    let candidates: Vec<&Word> = words.iter().collect();
    let search = SlotSearch::new(std::array::from_fn(|_| candidates.clone()));
    let outcome = search.run(|_| true);

    log::debug!(
        "builder explored {} nodes over {} words",
        outcome.nodes,
        words.len()
    );

    outcome.waffle.ok_or(WaffleError::NotFound)
}

/// Find a valid waffle after shuffling a copy of the word order
///
/// # Errors
/// Returns `WaffleError::NotFound` under the same conditions as [`build`].
pub fn build_with_rng<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Waffle, WaffleError> {
    let mut order = words.to_vec();
    order.shuffle(rng);
    build(&order)
}

/// Apply `swaps` random swaps between distinct swappable cells
///
/// A result identical to `grid` is reshuffled whenever `swaps > 0`, unless
/// every swappable cell holds the same letter and no other outcome exists.
pub fn shuffle<R: Rng + ?Sized>(grid: &Grid, swaps: usize, rng: &mut R) -> Grid {
    let first = grid.letter(SWAPPABLE[0]);
    let uniform = SWAPPABLE.iter().all(|&cell| grid.letter(cell) == first);
    if swaps == 0 || uniform {
        return *grid;
    }

    loop {
        let mut shuffled = *grid;
        for _ in 0..swaps {
            let (a, b) = random_pair(rng);
            shuffled.swap(a, b);
        }
        if shuffled != *grid {
            return shuffled;
        }
        log::trace!("shuffle of {swaps} swaps left the grid solved, retrying");
    }
}

/// Two distinct cells drawn uniformly from the swappable list
fn random_pair<R: Rng + ?Sized>(rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..SWAPPABLE.len());
    let mut b = rng.random_range(0..SWAPPABLE.len() - 1);
    if b >= a {
        b += 1;
    }
    (SWAPPABLE[a], SWAPPABLE[b])
}
