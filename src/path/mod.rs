//! Swap pathfinding between two letter arrangements
//!
//! States pair a grid with its feedback against the goal. The goal is passed
//! to every call rather than stored anywhere.

mod astar;
mod state;

pub use astar::{SearchMode, SwapPath, a_star, heuristic, solve_path};
pub use state::{Neighbours, WaffleState};
