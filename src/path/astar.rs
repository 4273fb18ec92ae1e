//! A* search for the shortest sequence of letter swaps
//!
//! Every swap costs one move and can fix at most two cells, so half the
//! number of non-exact cells never overestimates the remaining distance.

use super::state::{WaffleState, changed_cells};
use crate::core::topology::is_swappable;
use crate::core::{CELL_COUNT, Feedback, Grid};
use crate::error::{InputError, WaffleError};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// How the open set is managed during search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Commit to the first swap that fixes two cells at once
    ///
    /// Much faster on heavily shuffled grids, but the path may be longer
    /// than optimal.
    #[default]
    PerfectMove,
    /// Plain A*; the path is always minimal
    Exhaustive,
}

/// Lower bound on the swaps left: `(21 - exact) / 2`
#[inline]
#[must_use]
pub fn heuristic(state: &WaffleState) -> usize {
    (CELL_COUNT - state.exact_count()) / 2
}

/// Find a path of states from `start` to `goal`
///
/// Returns the states oldest first, including both ends, or an empty
/// vector if the open set runs dry.
#[must_use]
pub fn a_star(start: &WaffleState, goal: &Grid, mode: SearchMode) -> Vec<WaffleState> {
    let mut open = BinaryHeap::new();
    let mut closed: FxHashSet<Grid> = FxHashSet::default();
    let mut g_score: FxHashMap<Grid, usize> = FxHashMap::default();
    let mut came_from: FxHashMap<Grid, Grid> = FxHashMap::default();

    g_score.insert(*start.grid(), 0);
    open.push(Reverse((heuristic(start), *start)));
    let mut expansions = 0usize;

    while let Some(Reverse((_, current))) = open.pop() {
        if current.is_goal() {
            log::debug!("A* reached goal after {expansions} expansions");
            return reconstruct(&came_from, current, goal);
        }
        if !closed.insert(*current.grid()) {
            continue;
        }
        let Some(&g) = g_score.get(current.grid()) else {
            continue;
        };
        expansions += 1;

        let mut perfect = None;
        for (_, next) in current.neighbours(goal) {
            if closed.contains(next.grid()) {
                continue;
            }
            let tentative = g + 1;
            if g_score
                .get(next.grid())
                .is_some_and(|&known| known <= tentative)
            {
                continue;
            }
            g_score.insert(*next.grid(), tentative);
            came_from.insert(*next.grid(), *current.grid());

            if mode == SearchMode::PerfectMove && next.exact_count() == current.exact_count() + 2 {
                perfect = Some(next);
                break;
            }
            open.push(Reverse((tentative + heuristic(&next), next)));
        }

        if let Some(next) = perfect {
            log::trace!("perfect move drops {} open states", open.len());
            open.clear();
            // Dropped states must be rediscoverable
            g_score.retain(|grid, _| closed.contains(grid));
            g_score.insert(*next.grid(), g + 1);
            open.push(Reverse((g + 1 + heuristic(&next), next)));
        }
    }

    log::debug!("A* exhausted open set after {expansions} expansions");
    Vec::new()
}

fn reconstruct(
    came_from: &FxHashMap<Grid, Grid>,
    end: WaffleState,
    goal: &Grid,
) -> Vec<WaffleState> {
    let mut path = vec![end];
    let mut cursor = *end.grid();
    while let Some(&parent) = came_from.get(&cursor) {
        path.push(WaffleState::new(parent, goal));
        cursor = parent;
    }
    path.reverse();
    path
}

/// A solved swap sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPath {
    states: Vec<WaffleState>,
    swaps: Vec<(usize, usize)>,
}

impl SwapPath {
    fn from_states(states: Vec<WaffleState>) -> Self {
        let swaps = states
            .windows(2)
            .filter_map(|pair| {
                let mut cells = changed_cells(pair[0].grid(), pair[1].grid());
                Some((cells.next()?, cells.next()?))
            })
            .collect();
        Self { states, swaps }
    }

    /// Every state on the path, start first
    #[must_use]
    pub fn states(&self) -> &[WaffleState] {
        &self.states
    }

    /// Cell pairs to swap, in order
    #[must_use]
    pub fn swaps(&self) -> &[(usize, usize)] {
        &self.swaps
    }

    /// Number of swaps
    #[must_use]
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }
}

/// Find the swaps turning `start` into `goal`
///
/// # Errors
/// Returns `InputError::LetterMismatch` when the grids hold different
/// letters, and `WaffleError::Unreachable` when a corner or the centre is
/// wrong or the search gives up.
///
/// # Examples
/// ```
/// use waffle_solver::core::Grid;
/// use waffle_solver::path::{SearchMode, solve_path};
///
/// let goal: Grid = "BROILOAOASKEWREEDINER".parse().unwrap();
/// let start = goal.swapped(1, 2).swapped(6, 19);
///
/// let path = solve_path(&start, &goal, SearchMode::Exhaustive).unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.swaps(), &[(6, 19), (1, 2)]);
/// ```
pub fn solve_path(start: &Grid, goal: &Grid, mode: SearchMode) -> Result<SwapPath, WaffleError> {
    if start.letter_counts() != goal.letter_counts() {
        return Err(InputError::LetterMismatch.into());
    }

    let start = WaffleState::new(*start, goal);
    let pinned_wrong = (0..CELL_COUNT)
        .any(|cell| !is_swappable(cell) && start.feedback().get(cell) != Feedback::Exact);
    if pinned_wrong {
        return Err(WaffleError::Unreachable);
    }

    let states = a_star(&start, goal, mode);
    if states.is_empty() {
        return Err(WaffleError::Unreachable);
    }
    Ok(SwapPath::from_states(states))
}
