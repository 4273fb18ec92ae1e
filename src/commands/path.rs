//! Swap path command

use crate::core::{FeedbackMatrix, Grid};
use crate::error::WaffleError;
use crate::path::{SearchMode, SwapPath, WaffleState, solve_path};

/// Inputs for a path search
pub struct PathConfig {
    pub start: Grid,
    pub goal: Grid,
    /// Feedback the caller expects for `start`; checked before searching
    pub feedback: Option<FeedbackMatrix>,
    pub mode: SearchMode,
}

/// Find the swaps from `config.start` to `config.goal`
///
/// # Errors
///
/// Returns `InputError::FeedbackMismatch` when the supplied feedback is not
/// the start's feedback against the goal, plus any error of [`solve_path`].
pub fn find_path(config: &PathConfig) -> Result<SwapPath, WaffleError> {
    if let Some(feedback) = config.feedback {
        WaffleState::with_feedback(config.start, feedback, &config.goal)?;
    }
    solve_path(&config.start, &config.goal, config.mode)
}
