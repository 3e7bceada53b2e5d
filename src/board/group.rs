//! Defines the Group type, the per-unit solving state.

use super::cell::Cell;
use crate::core::{GroupId, GroupKind, Loc, LocSet, Num, NumSet};

/// One of the 27 constraint groups, tracking which of its nine symbols are
/// placed and where.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
  id: GroupId,
  members: [Loc; 9],
  placed: [Option<Loc>; 9],
  remaining: NumSet,
  unsolved: LocSet,
}

impl Group {
  pub(crate) fn new(id: GroupId) -> Self {
    Group {
      id,
      members: *id.members(),
      placed: [None; 9],
      remaining: NumSet::all(),
      unsolved: id.locs(),
    }
  }

  pub fn id(&self) -> GroupId {
    self.id
  }

  pub fn kind(&self) -> GroupKind {
    self.id.kind()
  }

  /// Whether the given symbol is already placed in this group.
  pub fn has(&self, num: Num) -> bool {
    !self.remaining.contains(num)
  }

  /// Where the given symbol is placed in this group, once it is.
  pub fn placed_loc(&self, num: Num) -> Option<Loc> {
    self.placed[num.index()]
  }

  /// The symbols not yet placed in this group.
  pub fn remaining(&self) -> NumSet {
    self.remaining
  }

  /// This group's locations, in grid order.
  pub fn members(&self) -> [Loc; 9] {
    self.members
  }

  /// Iterates this group's unsolved locations, in grid order.
  pub fn unsolved(&self) -> impl Iterator<Item = Loc> {
    self.unsolved.iter()
  }

  /// Notes that `num` now occupies `loc`.  Callers guarantee the symbol
  /// was not already placed here.
  pub(crate) fn record(&mut self, num: Num, loc: Loc) {
    self.placed[num.index()] = Some(loc);
    self.remaining.remove(num);
    self.unsolved.remove(loc);
  }

  /// This group's unsolved locations that could still take `num`, skipping
  /// `excluded` locations and any cell whose flags commit it elsewhere: a
  /// flagged cell only counts when `num` is among its flags.
  pub(crate) fn unsolved_scoped(
    &self,
    cells: &[Cell; 81],
    excluded: LocSet,
    num: Num,
  ) -> Vec<Loc> {
    self
      .unsolved
      .iter()
      .filter(|&loc| {
        if excluded.contains(loc) {
          return false;
        }
        let cell = &cells[loc.index()];
        (cell.flags.is_empty() && cell.lock.is_none())
          || cell.flags.contains(num)
      })
      .collect()
  }
}
