//! Defines the core ripple-doku types.
//!
//! Among these are:
//!
//! - Grid: the 9x9 Sudoku board as a plain value
//! - Num: the 9 symbols that go in the grid's squares
//! - Loc: the 81 locations of the grid
//! - various types identifying parts of the grid like Row, Col and GroupId

mod grid;
mod ids;
mod loc;
mod num;
mod set;
mod units;

pub use grid::*;
pub use loc::*;
pub use num::*;
pub use units::*;
