//! Defines the Cell type, the per-location solving state.

use crate::core::{Loc, LocSet, Num, NumSet};
use serde::Serialize;

/// One square of the board while it is being solved.  Beyond its optional
/// value, a cell carries the deductive state the solver accretes: the
/// symbols it could still hold, the symbols it has been flagged as a
/// candidate home for, an optional lock partner, and the set of cells
/// watching it for pair resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
  pub(crate) loc: Loc,
  pub(crate) value: Option<Num>,
  pub(crate) given: bool,
  pub(crate) candidates: NumSet,
  pub(crate) flags: NumSet,
  pub(crate) lock: Option<Loc>,
  pub(crate) watchers: LocSet,
}

impl Cell {
  pub(crate) fn new(loc: Loc) -> Self {
    Cell {
      loc,
      value: None,
      given: false,
      candidates: NumSet::all(),
      flags: NumSet::new(),
      lock: None,
      watchers: LocSet::new(),
    }
  }

  /// Where this cell sits in the grid.
  pub fn loc(&self) -> Loc {
    self.loc
  }

  /// The symbol assigned to this cell, once there is one.
  pub fn value(&self) -> Option<Num> {
    self.value
  }

  /// Whether this cell's value arrived as a clue rather than a deduction.
  pub fn given(&self) -> bool {
    self.given
  }

  /// The symbols this cell could still hold, per its own bookkeeping.
  /// Unsolved cells start with all nine and only ever lose members.
  pub fn candidates(&self) -> NumSet {
    self.candidates
  }

  /// The symbols this cell has been flagged as a candidate home for.
  pub fn flags(&self) -> NumSet {
    self.flags
  }

  /// The cell this one is locked to, when a flagged pair has been
  /// committed to.
  pub fn lock(&self) -> Option<Loc> {
    self.lock
  }

  /// Snapshots this cell for reporting.
  pub fn view(&self) -> CellView {
    CellView {
      value: self.value.map(Num::get),
      flags: self.flags.iter().map(Num::get).collect(),
      given: self.given,
    }
  }
}

/// A serializable snapshot of one cell's visible state.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CellView {
  pub value: Option<i8>,
  pub flags: Vec<i8>,
  pub given: bool,
}
