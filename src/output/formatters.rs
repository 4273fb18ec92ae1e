//! Formatting utilities for terminal output

use crate::core::topology::cell_at;
use crate::core::{Coord, Feedback, FeedbackMatrix, GRID_SIZE};

/// Emoji for one feedback class
#[must_use]
pub const fn feedback_to_emoji(feedback: Feedback) -> char {
    match feedback {
        Feedback::Exact => '🟩',
        Feedback::Misplaced => '🟨',
        Feedback::Absent => '⬜',
    }
}

/// Feedback as five emoji rows, holes left blank
#[must_use]
pub fn feedback_to_emoji_rows(feedback: &FeedbackMatrix) -> [String; GRID_SIZE] {
    std::array::from_fn(|row| {
        (0..GRID_SIZE)
            .map(|col| {
                feedback
                    .at(Coord::new(row, col))
                    .map_or_else(|| "  ".to_string(), |f| feedback_to_emoji(f).to_string())
            })
            .collect()
    })
}

/// Cell numbers laid out as the grid, for choosing swaps
#[must_use]
pub fn cell_index_rows() -> [String; GRID_SIZE] {
    std::array::from_fn(|row| {
        (0..GRID_SIZE)
            .map(|col| {
                cell_at(Coord::new(row, col))
                    .map_or_else(|| "   ".to_string(), |cell| format!("{cell:>3}"))
            })
            .collect()
    })
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_per_class() {
        assert_eq!(feedback_to_emoji(Feedback::Exact), '🟩');
        assert_eq!(feedback_to_emoji(Feedback::Misplaced), '🟨');
        assert_eq!(feedback_to_emoji(Feedback::Absent), '⬜');
    }

    #[test]
    fn emoji_rows_leave_holes_blank() {
        let feedback: FeedbackMatrix = "011000000000000000000".parse().unwrap();
        let rows = feedback_to_emoji_rows(&feedback);
        assert_eq!(rows[0], "🟩🟨🟨🟩🟩");
        assert_eq!(rows[1], "🟩  🟩  🟩");
    }

    #[test]
    fn index_rows_show_cell_numbers() {
        let rows = cell_index_rows();
        assert_eq!(rows[0], "  0  1  2  3  4");
        assert_eq!(rows[1], "  5     6     7");
        assert_eq!(rows[4], " 16 17 18 19 20");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
