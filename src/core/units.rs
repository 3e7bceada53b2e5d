//! Defines the Sudoku "units": the rows, columns, and blocks whose cells
//! must each end up holding all nine symbols.

use crate::core::loc::{Loc, LocSet};
use crate::define_ids;
use core::fmt;
use once_cell::sync::Lazy;
use paste::paste;
use seq_macro::seq;
use serde::Serialize;

define_ids! {
  /// Identifies one of the 9 rows.
  Row: i8[9];

  /// Identifies one of the 9 columns.
  Col: i8[9];

  /// Identifies one of the 9 blocks, in row-major order.
  Blk: i8[9];

  /// Identifies one of the 27 groups: rows first, then columns, then
  /// blocks.
  GroupId: i8[27];
}

/// Distinguishes the three shapes of group.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum GroupKind {
  Row,
  Col,
  Blk,
}

// Constant values R1..R9, C1..C9, and B1..B9.
seq!(K in 1..=9 {
    paste! {
        pub const [<R K>]: Row = Row(K - 1);
        pub const [<C K>]: Col = Col(K - 1);
        pub const [<B K>]: Blk = Blk(K - 1);
    }
});

impl GroupId {
  /// The id of a row's group.
  pub const fn from_row(row: Row) -> Self {
    GroupId(row.0)
  }

  /// The id of a column's group.
  pub const fn from_col(col: Col) -> Self {
    GroupId(9 + col.0)
  }

  /// The id of a block's group.
  pub const fn from_blk(blk: Blk) -> Self {
    GroupId(18 + blk.0)
  }

  /// Which shape of group this is.
  pub const fn kind(self) -> GroupKind {
    match self.0 {
      0..=8 => GroupKind::Row,
      9..=17 => GroupKind::Col,
      _ => GroupKind::Blk,
    }
  }

  /// The locations that make up this group, in grid order.
  pub fn members(self) -> &'static [Loc; 9] {
    &MEMBERS[self.index()]
  }

  /// This group's locations as a set.
  pub fn locs(self) -> LocSet {
    self.members().iter().copied().collect()
  }
}

impl Row {
  pub const fn group_id(self) -> GroupId {
    GroupId::from_row(self)
  }

  pub fn locs(self) -> LocSet {
    self.group_id().locs()
  }
}

impl Col {
  pub const fn group_id(self) -> GroupId {
    GroupId::from_col(self)
  }

  pub fn locs(self) -> LocSet {
    self.group_id().locs()
  }
}

impl Blk {
  pub const fn group_id(self) -> GroupId {
    GroupId::from_blk(self)
  }

  pub fn locs(self) -> LocSet {
    self.group_id().locs()
  }
}

static MEMBERS: Lazy<[[Loc; 9]; 27]> = Lazy::new(|| {
  let mut table = [[Loc::from_index(0).unwrap(); 9]; 27];
  for loc in Loc::all() {
    let (r, c) = (loc.row(), loc.col());
    table[GroupId::from_row(r).index()][c.index()] = loc;
    table[GroupId::from_col(c).index()][r.index()] = loc;
    table[GroupId::from_blk(loc.blk()).index()]
      [r.index() % 3 * 3 + c.index() % 3] = loc;
  }
  table
});

impl fmt::Debug for Row {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "R{}", self.ordinal())
  }
}

impl fmt::Debug for Col {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "C{}", self.ordinal())
  }
}

impl fmt::Debug for Blk {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "B{}", self.ordinal())
  }
}

impl fmt::Debug for GroupId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind() {
      GroupKind::Row => write!(f, "R{}", self.0 + 1),
      GroupKind::Col => write!(f, "C{}", self.0 - 9 + 1),
      GroupKind::Blk => write!(f, "B{}", self.0 - 18 + 1),
    }
  }
}

impl fmt::Display for GroupId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::loc::*;

  #[test]
  fn group_ids() {
    assert_eq!(0, R1.group_id().get());
    assert_eq!(9, C1.group_id().get());
    assert_eq!(26, B9.group_id().get());
    assert_eq!("R3", format!("{}", R3.group_id()));
    assert_eq!("C7", format!("{}", C7.group_id()));
    assert_eq!("B5", format!("{}", B5.group_id()));
  }

  #[test]
  fn members_cover() {
    // Every location sits in exactly 3 of the 27 groups.
    for loc in Loc::all() {
      let owners: Vec<_> = GroupId::all()
        .filter(|g| g.members().contains(&loc))
        .collect();
      assert_eq!(3, owners.len(), "{:?} owned by {:?}", loc, owners);
      assert_eq!(loc.group_ids().to_vec(), owners);
    }
    for id in GroupId::all() {
      assert_eq!(9, id.locs().len());
    }
  }

  #[test]
  fn block_members() {
    assert_eq!(
      &[L44, L45, L46, L54, L55, L56, L64, L65, L66],
      B5.group_id().members()
    );
  }
}
