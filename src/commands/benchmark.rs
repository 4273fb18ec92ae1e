//! Benchmark command
//!
//! Generates many seeded puzzles in parallel, solves each one from its
//! shuffled grid and feedback alone, and collects swap statistics.

use crate::core::Word;
use crate::path::{SearchMode, solve_path};
use crate::solver::{Puzzle, PuzzleConfig, infer};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub count: usize,
    pub swaps: usize,
    /// Seed of the first puzzle; puzzle `i` uses `seed + i`
    pub seed: u64,
}

/// Outcome of one benchmarked puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleOutcome {
    pub seed: u64,
    /// The solver found a waffle explaining the feedback
    pub inferred: bool,
    /// The inferred waffle is the one the puzzle was built from
    pub recovered_original: bool,
    pub swaps_to_solve: Option<usize>,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub inferred: usize,
    pub recovered_original: usize,
    pub failures: Vec<u64>,
    pub average_swaps: f64,
    pub min_swaps: usize,
    pub max_swaps: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Run the benchmark on the rayon pool
#[must_use]
pub fn run_benchmark(words: &[Word], config: &BenchmarkConfig, show_progress: bool) -> BenchmarkResult {
    let pb = if show_progress {
        progress_bar(config.count as u64)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<PuzzleOutcome> = (0..config.count as u64)
        .into_par_iter()
        .map(|offset| {
            let outcome = run_one(words, config.swaps, config.seed.wrapping_add(offset));
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(&outcomes, start.elapsed())
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(err) => log::debug!("falling back to default progress style: {err}"),
    }
    pb
}

/// Generate, infer and path-solve one seeded puzzle
fn run_one(words: &[Word], swaps: usize, seed: u64) -> PuzzleOutcome {
    let mut outcome = PuzzleOutcome {
        seed,
        inferred: false,
        recovered_original: false,
        swaps_to_solve: None,
    };

    let config = PuzzleConfig::default().with_swaps(swaps).with_seed(seed);
    let puzzle = match Puzzle::generate(words, &config) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            log::debug!("seed {seed}: generation failed: {err}");
            return outcome;
        }
    };

    let solution = match infer(words, puzzle.grid(), puzzle.feedback()) {
        Ok(solution) => solution,
        Err(err) => {
            log::debug!("seed {seed}: inference failed: {err}");
            return outcome;
        }
    };
    outcome.inferred = true;
    outcome.recovered_original = solution == *puzzle.solution();

    match solve_path(puzzle.grid(), solution.grid(), SearchMode::default()) {
        Ok(path) => outcome.swaps_to_solve = Some(path.len()),
        Err(err) => log::debug!("seed {seed}: pathfinding failed: {err}"),
    }
    outcome
}

fn summarize(outcomes: &[PuzzleOutcome], duration: Duration) -> BenchmarkResult {
    let swaps: Vec<usize> = outcomes.iter().filter_map(|o| o.swaps_to_solve).collect();

    let mut distribution = BTreeMap::new();
    for &count in &swaps {
        *distribution.entry(count).or_insert(0) += 1;
    }

    let average_swaps = if swaps.is_empty() {
        0.0
    } else {
        swaps.iter().sum::<usize>() as f64 / swaps.len() as f64
    };

    BenchmarkResult {
        total_puzzles: outcomes.len(),
        inferred: outcomes.iter().filter(|o| o.inferred).count(),
        recovered_original: outcomes.iter().filter(|o| o.recovered_original).count(),
        failures: outcomes
            .iter()
            .filter(|o| o.swaps_to_solve.is_none())
            .map(|o| o.seed)
            .collect(),
        average_swaps,
        min_swaps: swaps.iter().copied().min().unwrap_or(0),
        max_swaps: swaps.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        puzzles_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
