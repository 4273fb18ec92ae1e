//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji_rows};
use crate::commands::{BenchmarkResult, GenerateResult, SolveResult};
use crate::core::{Coord, Feedback, FeedbackMatrix, GRID_SIZE, Grid};
use crate::path::SwapPath;
use colored::Colorize;

/// Render a grid as five colored rows, one tile per cell
#[must_use]
pub fn grid_lines(grid: &Grid, feedback: &FeedbackMatrix) -> [String; GRID_SIZE] {
    std::array::from_fn(|row| {
        (0..GRID_SIZE)
            .map(|col| {
                let coord = Coord::new(row, col);
                match (grid.at(coord), feedback.at(coord)) {
                    (Some(letter), Some(class)) => {
                        let tile = format!(" {} ", char::from(letter)).black().bold();
                        match class {
                            Feedback::Exact => tile.on_green(),
                            Feedback::Misplaced => tile.on_yellow(),
                            Feedback::Absent => tile.on_white(),
                        }
                        .to_string()
                    }
                    _ => "   ".to_string(),
                }
            })
            .collect()
    })
}

/// Print a grid with its feedback colors
pub fn print_grid(grid: &Grid, feedback: &FeedbackMatrix) {
    for line in grid_lines(grid, feedback) {
        println!("   {line}");
    }
}

/// Print a freshly generated puzzle
pub fn print_generate_result(result: &GenerateResult, reveal: bool) {
    let puzzle = &result.puzzle;
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "GENERATED PUZZLE".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!();
    print_grid(puzzle.grid(), puzzle.feedback());
    println!("\n   Letters:   {}", puzzle.grid().to_string().bright_white());
    println!("   Feedback:  {}", puzzle.feedback());
    println!(
        "   Solvable in {} swaps ({} allowed)",
        result.swaps_to_solve.to_string().bright_yellow().bold(),
        puzzle.moves_left()
    );

    if reveal {
        println!("\n   Solution:  {}", puzzle.solution().to_string().green());
    }
}

/// Print the inferred solution and the swaps leading to it
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.shuffled.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    print_grid(&result.shuffled, &result.feedback);

    println!("\n📖 {}", "Words:".bright_cyan().bold());
    for word in result.solution.words() {
        println!("   • {word}");
    }

    println!();
    print_grid(result.solution.grid(), &FeedbackMatrix::SOLVED);
    println!();
    print_path(&result.path, verbose);
}

/// Print a swap sequence, optionally with every intermediate grid
pub fn print_path(path: &SwapPath, verbose: bool) {
    if path.is_empty() {
        println!("{}", "✅ Already solved!".green().bold());
        return;
    }

    for (step, ((a, b), state)) in path.swaps().iter().zip(&path.states()[1..]).enumerate() {
        println!(
            "Swap {}: cells {} ↔ {}  {}",
            step + 1,
            a.to_string().bright_white().bold(),
            b.to_string().bright_white().bold(),
            format!("({} exact)", state.exact_count()).bright_black()
        );
        if verbose {
            for row in feedback_to_emoji_rows(state.feedback()) {
                println!("   {row}");
            }
        }
    }

    println!(
        "\n{}",
        format!("✅ Solved in {} swaps!", path.len()).green().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    println!(
        "   Inferred:         {} ({} original)",
        result.inferred, result.recovered_original
    );
    println!(
        "   Average swaps:    {}",
        format!("{:.2}", result.average_swaps).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_swaps).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_swaps).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if !result.failures.is_empty() {
        println!(
            "   {} {:?}",
            "Failed seeds:".red().bold(),
            result.failures
        );
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let solved = result.total_puzzles - result.failures.len();
    for (&swaps, &count) in &result.distribution {
        let pct = (count as f64 / solved.max(1) as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {swaps:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lines_keep_letters_and_holes() {
        colored::control::set_override(false);
        let grid: Grid = "BROILOAOASKEWREEDINER".parse().unwrap();
        let lines = grid_lines(&grid, &FeedbackMatrix::SOLVED);
        assert_eq!(lines[0], " B  R  O  I  L ");
        assert_eq!(lines[1], " O     A     O ");
    }
}
