//! Search states for the swap pathfinder

use crate::core::topology::SWAPPABLE;
use crate::core::{CELL_COUNT, Feedback, FeedbackMatrix, Grid, diff};
use crate::error::InputError;

/// Letters plus their feedback against a fixed goal
///
/// Ordering compares letters first, which is the pathfinder's tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaffleState {
    grid: Grid,
    feedback: FeedbackMatrix,
}

impl WaffleState {
    #[must_use]
    pub fn new(grid: Grid, goal: &Grid) -> Self {
        Self {
            feedback: diff(goal, &grid),
            grid,
        }
    }

    /// Build a state from letters and a claimed feedback
    ///
    /// # Errors
    /// Returns `InputError::FeedbackMismatch` if `feedback` is not the
    /// feedback of `grid` against `goal`.
    pub fn with_feedback(
        grid: Grid,
        feedback: FeedbackMatrix,
        goal: &Grid,
    ) -> Result<Self, InputError> {
        let state = Self::new(grid, goal);
        if state.feedback != feedback {
            return Err(InputError::FeedbackMismatch);
        }
        Ok(state)
    }

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

    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.feedback.count_exact()
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.feedback.is_solved()
    }

    /// Lazily enumerate the states one useful swap away
    #[must_use]
    pub fn neighbours<'g>(&self, goal: &'g Grid) -> Neighbours<'g> {
        let movable = SWAPPABLE
            .iter()
            .copied()
            .filter(|&cell| self.feedback.get(cell) != Feedback::Exact)
            .collect();
        Neighbours {
            origin: *self,
            goal,
            movable,
            first: 0,
            second: 1,
        }
    }
}

/// Iterator over swaps of two non-exact swappable cells holding different
/// letters, in ascending `(a, b)` order with `a < b`
pub struct Neighbours<'g> {
    origin: WaffleState,
    goal: &'g Grid,
    movable: Vec<usize>,
    first: usize,
    second: usize,
}

impl Iterator for Neighbours<'_> {
    type Item = ((usize, usize), WaffleState);

    fn next(&mut self) -> Option<Self::Item> {
        while self.first < self.movable.len() {
            if self.second >= self.movable.len() {
                self.first += 1;
                self.second = self.first + 1;
                continue;
            }

            let (a, b) = (self.movable[self.first], self.movable[self.second]);
            self.second += 1;

            let grid = self.origin.grid;
            if grid.letter(a) == grid.letter(b) {
                continue;
            }
            return Some(((a, b), WaffleState::new(grid.swapped(a, b), self.goal)));
        }
        None
    }
}

/// Cells whose letters differ between two grids
pub(crate) fn changed_cells(before: &Grid, after: &Grid) -> impl Iterator<Item = usize> {
    (0..CELL_COUNT).filter(move |&cell| before.letter(cell) != after.letter(cell))
}
