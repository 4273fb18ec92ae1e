//! Recover the solved words from a shuffled grid and its feedback

use super::constraints::ConstraintSet;
use super::search::SlotSearch;
use crate::core::{FeedbackMatrix, Grid, SLOT_COUNT, Waffle, Word, diff};
use crate::error::WaffleError;

/// Find a waffle over `words` that explains `feedback` for `shuffled`
///
/// Candidate words are pre-filtered per slot against the cell constraints
/// and the letter ceiling. A complete assignment is accepted only when its
/// own feedback against `shuffled` reproduces `feedback` exactly.
///
/// # Errors
/// Returns `WaffleError::NotFound` when no such waffle exists in `words`.
///
/// # Examples
/// ```
/// use waffle_solver::core::{FeedbackMatrix, Grid, Word};
/// use waffle_solver::solver::infer;
///
/// let words: Vec<Word> = ["oaken", "askew", "broil", "lower", "diner", "board"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let shuffled: Grid = "BORILOAOASKEWREEDINER".parse().unwrap();
/// let feedback: FeedbackMatrix = "011000000000000000000".parse().unwrap();
///
/// let waffle = infer(&words, &shuffled, &feedback).unwrap();
/// assert_eq!(waffle.grid().to_string(), "BROILOAOASKEWREEDINER");
/// ```
pub fn infer(
    words: &[Word],
    shuffled: &Grid,
    feedback: &FeedbackMatrix,
) -> Result<Waffle, WaffleError> {
    let constraints = ConstraintSet::from_feedback(shuffled, feedback);
    log::debug!(
        "constraints fix {} of 21 cells",
        constraints.fixed_cells()
    );

    let slots: [Vec<&Word>; SLOT_COUNT] = std::array::from_fn(|slot| {
        words
            .iter()
            .filter(|word| constraints.admits(slot, word))
            .collect()
    });
    let search = SlotSearch::new(slots).with_ceiling(*constraints.ceiling());
    log::debug!("candidates per slot: {:?}", search.candidate_counts());

    let mut rejected = 0usize;
    let outcome = search.run(|grid| {
        let consistent = diff(grid, shuffled) == *feedback;
        if !consistent {
            rejected += 1;
        }
        consistent
    });
    log::debug!(
        "solver explored {} nodes, rejected {rejected} complete grids",
        outcome.nodes
    );

    outcome.waffle.ok_or(WaffleError::NotFound)
}
