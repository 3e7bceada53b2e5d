//! Defines the Loc type, which identifies the 81 locations of the Sudoku
//! grid, and LocSet, the bit-set of locations.

use crate::core::units::*;
use crate::{define_ids, define_set_operators};
use core::fmt;
use paste::paste;
use seq_macro::seq;

define_ids! {
  /// Identifies one of the 81 locations of a Sudoku grid, in row-major
  /// order.
  Loc: i8[81];
}

// Constant Loc values, L11 through L99: row then column, both 1-based.
seq!(R in 1..=9 {
    seq!(C in 1..=9 {
        paste! {
            #[allow(clippy::identity_op, clippy::erasing_op, clippy::eq_op)]
            pub const [<L R C>]: Loc = Loc((R - 1) * 9 + (C - 1));
        }
    });
});

impl Loc {
  /// Makes the location at the crossing of the given row and column.
  pub fn at(row: Row, col: Col) -> Self {
    Loc(row.0 * 9 + col.0)
  }

  /// This location's row.
  pub const fn row(self) -> Row {
    Row(self.0 / 9)
  }

  /// This location's column.
  pub const fn col(self) -> Col {
    Col(self.0 % 9)
  }

  /// This location's block.
  pub const fn blk(self) -> Blk {
    Blk(self.0 / 27 * 3 + self.0 % 9 / 3)
  }

  /// The ids of the three groups this location belongs to, in row, column,
  /// block order.
  pub fn group_ids(self) -> [GroupId; 3] {
    [
      GroupId::from_row(self.row()),
      GroupId::from_col(self.col()),
      GroupId::from_blk(self.blk()),
    ]
  }

  /// Returns a singleton set containing just this location.
  pub fn as_set(self) -> LocSet {
    LocSet::singleton(self)
  }
}

impl fmt::Debug for Loc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "L{}{}", self.row().ordinal(), self.col().ordinal())
  }
}

impl fmt::Display for Loc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.row().ordinal(), self.col().ordinal())
  }
}

/// A set of `Loc`s, stored as 81 bits.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct LocSet(u128);

const MASK: u128 = (1 << 81) - 1;

impl LocSet {
  /// Makes a new empty LocSet.
  pub const fn new() -> Self {
    LocSet(0)
  }

  /// Makes a new single-valued LocSet.
  pub fn singleton(loc: Loc) -> Self {
    LocSet(1 << loc.index())
  }

  /// Makes a new LocSet containing every location.
  pub const fn all() -> Self {
    LocSet(MASK)
  }

  /// Tells whether this set is empty.
  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// How many locations are in this set.
  pub fn len(self) -> usize {
    self.0.count_ones() as usize
  }

  /// Whether the given location is in this set.
  pub fn contains(self, loc: Loc) -> bool {
    self.0 & 1 << loc.index() != 0
  }

  /// Adds a location.  Tells whether it was previously absent.
  pub fn insert(&mut self, loc: Loc) -> bool {
    let old = self.0;
    self.0 |= 1 << loc.index();
    self.0 != old
  }

  /// Removes a location.  Tells whether it was previously present.
  pub fn remove(&mut self, loc: Loc) -> bool {
    let old = self.0;
    self.0 &= !(1 << loc.index());
    self.0 != old
  }

  /// The smallest location in this set, if there is one.
  pub fn smallest(self) -> Option<Loc> {
    Loc::from_index(self.0.trailing_zeros() as usize)
  }

  /// The sole location, when this is a singleton set.
  pub fn single(self) -> Option<Loc> {
    if self.len() == 1 {
      self.smallest()
    } else {
      None
    }
  }

  /// Iterates this set's locations in increasing order.
  pub fn iter(self) -> impl Iterator<Item = Loc> {
    let mut bits = self.0;
    std::iter::from_fn(move || {
      let loc = Loc::from_index(bits.trailing_zeros() as usize)?;
      bits &= bits - 1;
      Some(loc)
    })
  }
}

impl FromIterator<Loc> for LocSet {
  fn from_iter<I: IntoIterator<Item = Loc>>(iter: I) -> Self {
    let mut set = Self::new();
    for loc in iter {
      set.insert(loc);
    }
    set
  }
}

define_set_operators!(LocSet, MASK);

impl fmt::Debug for LocSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use itertools::Itertools;
    write!(f, "LocSet({:?})", self.iter().format(", "))
  }
}
