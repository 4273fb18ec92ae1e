//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    grid_lines, print_benchmark_result, print_generate_result, print_grid, print_path,
    print_solve_result,
};
