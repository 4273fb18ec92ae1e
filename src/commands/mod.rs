//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod path;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, PuzzleOutcome, run_benchmark};
pub use generate::{GenerateResult, generate_puzzle};
pub use path::{PathConfig, find_path};
pub use play::{GameOutcome, run_play, run_play_with};
pub use solve::{SolveResult, solve_puzzle};
