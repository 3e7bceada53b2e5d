//! Defines the Board type, the solving state for a whole puzzle, and the
//! Contradiction error produced when clues or deductions collide.
//!
//! The board owns every cell and every group, and all propagation flows
//! through it: assigning a symbol eliminates it from the cell's row and
//! column peers, notifies the cells watching the assigned one, and resolves
//! locked pairs, all of which can cascade into further assignments.

mod cell;
mod group;

pub use cell::{Cell, CellView};
pub use group::Group;

use crate::core::{Grid, GroupId, GroupKind, Loc, LocSet, Num, NumSet};
use itertools::Itertools;
use std::fmt;

/// The error produced when a symbol is assigned to a location whose row,
/// column, or block already holds that symbol.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contradiction {
  /// The location the assignment was aimed at.
  pub loc: Loc,
  /// The symbol that could not be placed.
  pub num: Num,
  /// The groups that already hold the symbol.
  pub groups: Vec<GroupId>,
}

impl fmt::Display for Contradiction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "can't put {} at {}: already placed in {}",
      self.num,
      self.loc,
      self.groups.iter().format(", ")
    )
  }
}

impl std::error::Error for Contradiction {}

/// A puzzle in progress.
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
  cells: [Cell; 81],
  groups: [Group; 27],
  /// For each symbol, the locations it has been placed at.
  locate: [LocSet; 9],
  /// Current depth of the assignment cascade.
  cascade: u8,
}

impl Board {
  /// Makes a board with no assignments.
  pub fn empty() -> Self {
    Board {
      cells: std::array::from_fn(|i| Cell::new(Loc::from_index(i).unwrap())),
      groups: std::array::from_fn(|i| {
        Group::new(GroupId::from_index(i).unwrap())
      }),
      locate: [LocSet::new(); 9],
      cascade: 0,
    }
  }

  /// Makes a board from a grid of clues.  Fails when the clues contradict
  /// each other.
  pub fn new(clues: &Grid) -> Result<Self, Contradiction> {
    let mut board = Self::empty();
    for (loc, num) in clues.iter() {
      board.set_given(loc, num)?;
    }
    Ok(board)
  }

  fn set_given(&mut self, loc: Loc, num: Num) -> Result<(), Contradiction> {
    self.set_value(loc, num)?;
    self.cells[loc.index()].given = true;
    Ok(())
  }

  pub fn cell(&self, loc: Loc) -> &Cell {
    &self.cells[loc.index()]
  }

  pub fn cells(&self) -> &[Cell; 81] {
    &self.cells
  }

  pub fn group(&self, id: GroupId) -> &Group {
    &self.groups[id.index()]
  }

  /// The locations the given symbol has been placed at so far.
  pub fn locations_of(&self, num: Num) -> LocSet {
    self.locate[num.index()]
  }

  /// How many of the 81 cells have values.
  pub fn solved_count(&self) -> usize {
    self.locate.iter().map(|set| set.len()).sum()
  }

  /// Snapshots the values as a plain grid.
  pub fn to_grid(&self) -> Grid {
    let mut grid = Grid::new();
    for cell in &self.cells {
      grid[cell.loc] = cell.value;
    }
    grid
  }

  /// Snapshots one cell for reporting.
  pub fn view(&self, loc: Loc) -> CellView {
    self.cells[loc.index()].view()
  }

  /// The unsolved locations carrying the given symbol as a flag.
  pub fn flagged(&self, num: Num) -> LocSet {
    self
      .cells
      .iter()
      .filter(|cell| cell.value.is_none() && cell.flags.contains(num))
      .map(|cell| cell.loc)
      .collect()
  }

  /// The symbols the given location could still take: its own candidate
  /// set, masked by what each of its three groups still needs.  Cells
  /// don't hear about every placement in their block directly, so the
  /// group mask is what keeps this exact.
  pub fn candidates_at(&self, loc: Loc) -> NumSet {
    let mut set = self.cells[loc.index()].candidates;
    for id in loc.group_ids() {
      set &= self.groups[id.index()].remaining();
    }
    set
  }

  /// Whether the given location could still take the given symbol.
  pub fn admits(&self, loc: Loc, num: Num) -> bool {
    self.candidates_at(loc).contains(num)
  }

  /// Assigns a symbol to a location, propagating the consequences.  This
  /// can cascade into further assignments; any contradiction anywhere in
  /// the cascade surfaces here.
  pub fn set_value(&mut self, loc: Loc, num: Num) -> Result<(), Contradiction> {
    self.cascade += 1;
    // A cascade step always consumes an unassigned cell.
    debug_assert!(self.cascade as usize <= Loc::COUNT);
    let result = self.set_value_inner(loc, num);
    self.cascade -= 1;
    result
  }

  fn set_value_inner(
    &mut self,
    loc: Loc,
    num: Num,
  ) -> Result<(), Contradiction> {
    let group_ids = loc.group_ids();
    let conflicts: Vec<GroupId> = group_ids
      .iter()
      .copied()
      .filter(|&id| self.groups[id.index()].has(num))
      .collect();
    if !conflicts.is_empty() {
      return Err(Contradiction { loc, num, groups: conflicts });
    }
    debug_assert!(self.cells[loc.index()].value.is_none());

    let cell = &mut self.cells[loc.index()];
    cell.value = Some(num);
    cell.candidates = NumSet::new();
    cell.flags = NumSet::new();
    let watchers = std::mem::take(&mut cell.watchers);
    self.locate[num.index()].insert(loc);

    for id in group_ids {
      self.groups[id.index()].record(num, loc);
      // Row and column peers hear about the placement directly; block
      // peers find out through the group mask in `candidates_at`.
      if id.kind() != GroupKind::Blk {
        for member in self.groups[id.index()].members() {
          if member != loc {
            let peer = &mut self.cells[member.index()];
            peer.candidates.remove(num);
            peer.flags.remove(num);
          }
        }
      }
    }

    for watcher in watchers.iter() {
      self.cells[watcher.index()].watchers.remove(loc);
      self.watcher_assigned(watcher, loc, num)?;
    }
    Ok(())
  }

  /// Tells a watcher that the cell it watched was assigned `num`.  When
  /// the two were locked together as a pair, the watcher's other flag is
  /// now forced.
  fn watcher_assigned(
    &mut self,
    watcher: Loc,
    assigned: Loc,
    num: Num,
  ) -> Result<(), Contradiction> {
    if self.cells[watcher.index()].value.is_some() {
      return Ok(());
    }
    let cell = &mut self.cells[watcher.index()];
    cell.candidates.remove(num);
    cell.flags.remove(num);
    if self.cells[assigned.index()].lock == Some(watcher) {
      if let Some(forced) = self.cells[watcher.index()].flags.single() {
        self.set_value(watcher, forced)?;
      }
    }
    Ok(())
  }

  /// Narrows a cell's flags (and candidates) down to `pair`.  Any watcher
  /// whose sole remaining flag is among the symbols dropped here loses its
  /// last alternative location for that symbol, so it gets the symbol.
  pub(crate) fn reset_flags(
    &mut self,
    loc: Loc,
    pair: NumSet,
  ) -> Result<(), Contradiction> {
    let cell = &mut self.cells[loc.index()];
    if cell.value.is_some() {
      return Ok(());
    }
    let removed = cell.flags - pair;
    cell.flags = pair;
    cell.candidates = pair;
    if removed.is_empty() {
      return Ok(());
    }
    for watcher in self.cells[loc.index()].watchers.iter() {
      let cell = &self.cells[watcher.index()];
      if cell.value.is_some() {
        continue;
      }
      if let Some(sole) = cell.flags.single() {
        if removed.contains(sole) {
          self.cells[watcher.index()].watchers.remove(loc);
          self.cells[loc.index()].watchers.remove(watcher);
          self.set_value(watcher, sole)?;
        }
      }
    }
    Ok(())
  }

  /// Flags a cell as a candidate home for a symbol.
  pub(crate) fn add_flag(&mut self, loc: Loc, num: Num) {
    let cell = &mut self.cells[loc.index()];
    if cell.value.is_none() {
      cell.flags.insert(num);
    }
  }

  /// Makes two cells watch each other.
  pub(crate) fn subscribe_pair(&mut self, a: Loc, b: Loc) {
    self.cells[a.index()].watchers.insert(b);
    self.cells[b.index()].watchers.insert(a);
  }

  /// Locks two cells together: once either is assigned, the other's
  /// remaining flag is forced.
  pub(crate) fn lock_pair(&mut self, a: Loc, b: Loc) {
    self.cells[a.index()].lock = Some(b);
    self.cells[b.index()].lock = Some(a);
  }

  /// The smallest flag shared by both cells, other than `excluding`.
  pub(crate) fn common_flag(
    &self,
    a: Loc,
    b: Loc,
    excluding: Num,
  ) -> Option<Num> {
    let shared = self.cells[a.index()].flags & self.cells[b.index()].flags;
    (shared - excluding.as_set()).smallest()
  }

  /// Drops `num` from the candidates (and any stale flag) of every
  /// unsolved cell in the group except the `keep` locations.
  pub(crate) fn eliminate_in_group(
    &mut self,
    id: GroupId,
    num: Num,
    keep: &[Loc],
  ) {
    for member in self.groups[id.index()].members() {
      if keep.contains(&member) {
        continue;
      }
      let cell = &mut self.cells[member.index()];
      if cell.value.is_none() {
        cell.candidates.remove(num);
        cell.flags.remove(num);
      }
    }
  }

  #[cfg(test)]
  pub(crate) fn cell_mut(&mut self, loc: Loc) -> &mut Cell {
    &mut self.cells[loc.index()]
  }
}

impl fmt::Debug for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{:?}\n({} unsolved)",
      self.to_grid(),
      Loc::COUNT - self.solved_count()
    )
  }
}
