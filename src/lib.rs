//! A deductive Sudoku solver.  It fills grids the way a careful human
//! would, by cascading constraint propagation, and stops honestly when its
//! heuristics run dry instead of falling back to search.

pub mod board;
pub mod core;
pub mod solve;
