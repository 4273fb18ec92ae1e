//! Waffle Solver
//!
//! Generator and solver for Waffle, the 5×5 word grid where six crossing
//! words have been scrambled by letter swaps.
//!
//! # Quick Start
//!
//! ```rust
//! use waffle_solver::core::{Grid, diff};
//! use waffle_solver::path::{SearchMode, solve_path};
//!
//! let solved: Grid = "BROILOAOASKEWREEDINER".parse().unwrap();
//! let shuffled = solved.swapped(1, 2);
//!
//! // Wordle-style feedback for every cell
//! let feedback = diff(&solved, &shuffled);
//! assert_eq!(feedback.to_string(), "011000000000000000000");
//!
//! // Swaps that restore the grid
//! let path = solve_path(&shuffled, &solved, SearchMode::default()).unwrap();
//! assert_eq!(path.swaps(), &[(1, 2)]);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Building, inferring and playing puzzles
pub mod solver;

// Swap pathfinding
pub mod path;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
