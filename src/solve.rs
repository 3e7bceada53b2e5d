//! Defines the deductive solving passes and the fixed-point loop that
//! drives them.
//!
//! The passes never guess.  Each one applies a human-style deduction to the
//! whole board: filling in the last open cell of a group, finding the only
//! spot a symbol fits in a group, assigning cells left with one candidate,
//! and trimming candidates via naked pairs.  The loop reruns them until the
//! board is solved or several rounds pass without progress.

use crate::board::{Board, Contradiction};
use crate::core::*;
use itertools::Itertools;
use serde::Serialize;

/// The outcome of a solving run that didn't hit a contradiction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Status {
  /// All 81 cells have values.
  Solved,
  /// The heuristics ran dry with cells still open.
  Stalled,
}

/// Identifies one completed pass over the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pass {
  /// Filled sole-remaining symbols per group.
  Missing,
  /// Scanned the groups for homes for one symbol.
  Scan(Num),
  /// Assigned cells down to a single candidate.
  Brute,
  /// Trimmed candidates via naked pairs.
  Reduce,
}

/// Watches a solving run.  The runner calls this after every pass, whether
/// or not the pass changed anything.
pub trait SolveObserver {
  fn pass_done(&mut self, pass: Pass, board: &Board);
}

/// An observer that ignores everything.
pub struct Quiet;
impl SolveObserver for Quiet {
  fn pass_done(&mut self, _pass: Pass, _board: &Board) {}
}

/// How many consecutive no-progress rounds the runner tolerates before
/// giving up.
const STALL_BUDGET: u32 = 5;

/// Runs the passes over the board until it's solved, the stall budget runs
/// out, or a contradiction surfaces.  The board is left in its final state
/// either way, so callers can inspect how far the deductions got.
pub fn run(
  board: &mut Board,
  observer: &mut dyn SolveObserver,
) -> Result<Status, Contradiction> {
  if board.solved_count() == Loc::COUNT {
    return Ok(Status::Solved);
  }
  let mut stalled_rounds = 0;
  while stalled_rounds < STALL_BUDGET {
    let before = board.solved_count();
    solve_missing(board)?;
    observer.pass_done(Pass::Missing, board);
    for num in Num::all() {
      solve_next(board, num)?;
      observer.pass_done(Pass::Scan(num), board);
    }
    solve_brutefully(board)?;
    observer.pass_done(Pass::Brute, board);
    reduce_possibility(board);
    observer.pass_done(Pass::Reduce, board);
    let now = board.solved_count();
    if now == Loc::COUNT {
      return Ok(Status::Solved);
    }
    if now == before {
      stalled_rounds += 1;
    } else {
      stalled_rounds = 0;
    }
  }
  Ok(Status::Stalled)
}

/// One-call convenience: builds a board from clues, runs it quietly, and
/// returns the outcome along with the final board.
pub fn solve(clues: &Grid) -> Result<(Status, Board), Contradiction> {
  let mut board = Board::new(clues)?;
  let status = run(&mut board, &mut Quiet)?;
  Ok((status, board))
}

/// Fills the last open cell of every group that has exactly one symbol
/// left to place.
pub fn solve_missing(board: &mut Board) -> Result<(), Contradiction> {
  for id in GroupId::all() {
    let group = board.group(id);
    let (num, loc) =
      match (group.remaining().single(), group.unsolved().next()) {
        (Some(num), Some(loc)) => (num, loc),
        _ => continue,
      };
    board.set_value(loc, num)?;
  }
  Ok(())
}

/// Hunts for homes for one symbol, group by group.  Blocks are scanned
/// twice, since a first block pass can pin lines that sharpen the second.
pub fn solve_next(board: &mut Board, num: Num) -> Result<(), Contradiction> {
  if board.locations_of(num).len() == Num::COUNT {
    return Ok(());
  }
  scan_groups(board, num, GroupKind::Blk)?;
  scan_groups(board, num, GroupKind::Blk)?;
  scan_groups(board, num, GroupKind::Row)?;
  scan_groups(board, num, GroupKind::Col)?;
  Ok(())
}

fn scan_groups(
  board: &mut Board,
  num: Num,
  kind: GroupKind,
) -> Result<(), Contradiction> {
  for id in GroupId::all().filter(|id| id.kind() == kind) {
    if board.group(id).has(num) {
      continue;
    }
    scan_group(board, id, num)?;
  }
  Ok(())
}

/// Looks at where `num` could go within one group.  A single spot is a
/// hidden single and gets the symbol.  Two spots become a flagged pair:
/// both cells watch each other, lines they share shed the symbol
/// elsewhere, and when the two already share another flagged symbol the
/// pair gets narrowed to those two symbols and locked.  Three collinear
/// spots shed the symbol from the rest of their line.
fn scan_group(
  board: &mut Board,
  id: GroupId,
  num: Num,
) -> Result<(), Contradiction> {
  let mut spots: Vec<Loc> = if id.kind() == GroupKind::Blk {
    let excluded = pinned_lines(board, id, num);
    board.group(id).unsolved_scoped(board.cells(), excluded, num)
  } else {
    board.group(id).unsolved().collect()
  };
  spots.retain(|&loc| board.admits(loc, num));
  match spots[..] {
    [loc] => board.set_value(loc, num)?,
    [a, b] => {
      // Look for a shared flag before adding this one, so the pair's
      // earlier shared symbol is the one that seals the lock.
      let second = board.common_flag(a, b, num);
      board.add_flag(a, num);
      board.add_flag(b, num);
      board.subscribe_pair(a, b);
      if a.row() == b.row() {
        board.eliminate_in_group(a.row().group_id(), num, &[a, b]);
      }
      if a.col() == b.col() {
        board.eliminate_in_group(a.col().group_id(), num, &[a, b]);
      }
      if let Some(second) = second {
        let pair = num.as_set() | second.as_set();
        board.reset_flags(a, pair)?;
        board.reset_flags(b, pair)?;
        board.lock_pair(a, b);
      }
    }
    [a, b, c] => {
      if [a, b, c].iter().map(|loc| loc.row()).all_equal() {
        board.eliminate_in_group(a.row().group_id(), num, &[a, b, c]);
      }
      if [a, b, c].iter().map(|loc| loc.col()).all_equal() {
        board.eliminate_in_group(a.col().group_id(), num, &[a, b, c]);
      }
    }
    _ => {}
  }
  Ok(())
}

/// The locations a block scan for `num` should skip: whole rows and
/// columns whose only two remaining spots for the symbol both lie outside
/// the block.  The symbol must land on one of those two cells, so no cell
/// of that line inside the block can take it.  Flags alone can't pin a
/// line: two cells can carry the same flag from unrelated pairings in
/// other groups.
fn pinned_lines(board: &Board, id: GroupId, num: Num) -> LocSet {
  let blk_locs = id.locs();
  let mut excluded = LocSet::new();
  for row in Row::all() {
    let spots = admitting(board, row.locs(), num);
    if spots.len() == 2 && (spots & blk_locs).is_empty() {
      excluded |= row.locs();
    }
  }
  for col in Col::all() {
    let spots = admitting(board, col.locs(), num);
    if spots.len() == 2 && (spots & blk_locs).is_empty() {
      excluded |= col.locs();
    }
  }
  excluded
}

fn admitting(board: &Board, line: LocSet, num: Num) -> LocSet {
  line.iter().filter(|&loc| board.admits(loc, num)).collect()
}

/// Assigns every unsolved cell that is down to a single possible symbol.
pub fn solve_brutefully(board: &mut Board) -> Result<(), Contradiction> {
  for loc in Loc::all() {
    if board.cell(loc).value().is_some() {
      continue;
    }
    if let Some(num) = board.candidates_at(loc).single() {
      board.set_value(loc, num)?;
    }
  }
  Ok(())
}

/// Trims candidates via naked pairs: two cells of a line sharing the same
/// two-symbol candidate set claim both symbols, so the rest of the line
/// sheds them.  This pass never assigns, so it can't contradict.
pub fn reduce_possibility(board: &mut Board) {
  for id in GroupId::all().filter(|id| id.kind() != GroupKind::Blk) {
    reduce_group(board, id);
  }
}

fn reduce_group(board: &mut Board, id: GroupId) {
  let open: Vec<Loc> = board.group(id).unsolved().collect();
  if open.len() <= 2 {
    return;
  }
  let twos: Vec<(Loc, NumSet)> = open
    .iter()
    .map(|&loc| (loc, board.candidates_at(loc)))
    .filter(|(_, candidates)| candidates.len() == 2)
    .collect();
  for ((a, ca), (b, cb)) in twos.iter().tuple_combinations() {
    if ca == cb {
      for num in ca.iter() {
        board.eliminate_in_group(id, num, &[*a, *b]);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::num_set;
  use std::str::FromStr;

  const SOLVED: &str =
    "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

  /// Blanks every occurrence of the given digits in the solved grid.
  fn without(digits: &[char]) -> Grid {
    let s: String = SOLVED
      .chars()
      .map(|c| if digits.contains(&c) { '.' } else { c })
      .collect();
    s.parse().unwrap()
  }

  /// Blanks the given locations in the solved grid.
  fn blanked(locs: &[Loc]) -> Grid {
    let mut grid = Grid::from_str(SOLVED).unwrap();
    for &loc in locs {
      grid[loc] = None;
    }
    grid
  }

  fn assert_valid_solution(board: &Board) {
    for id in GroupId::all() {
      assert!(board.group(id).remaining().is_empty(), "{} incomplete", id);
    }
  }

  #[test]
  fn already_solved() {
    let (status, board) = solve(&SOLVED.parse().unwrap()).unwrap();
    assert_eq!(Status::Solved, status);
    assert_eq!(SOLVED, board.to_grid().to_string());
  }

  /// Captures the solved count right after the first missing-symbols pass.
  struct FirstMissing(Option<usize>);
  impl SolveObserver for FirstMissing {
    fn pass_done(&mut self, pass: Pass, board: &Board) {
      if pass == Pass::Missing && self.0.is_none() {
        self.0 = Some(board.solved_count());
      }
    }
  }

  #[test]
  fn one_digit_blanked_solves_in_one_missing_pass() {
    let mut board = Board::new(&without(&['5'])).unwrap();
    let mut observer = FirstMissing(None);
    let status = run(&mut board, &mut observer).unwrap();
    assert_eq!(Status::Solved, status);
    assert_eq!(Some(81), observer.0);
    assert_eq!(SOLVED, board.to_grid().to_string());
    assert_valid_solution(&board);
  }

  #[test]
  fn corner_blanked_solves() {
    let clues = blanked(&[L11, L12, L21, L22]);
    let (status, board) = solve(&clues).unwrap();
    assert_eq!(Status::Solved, status);
    assert_eq!(SOLVED, board.to_grid().to_string());
    assert_valid_solution(&board);
    // The filled-in cells are deductions, not givens.
    assert!(!board.cell(L11).given());
    assert!(board.cell(L13).given());
  }

  #[test]
  fn two_digit_symmetry_stalls() {
    // With both 1s and 2s blanked, every deduction is blocked by the
    // swap symmetry between the two digits; no amount of rescanning can
    // break the tie.
    let (status, board) = solve(&without(&['1', '2'])).unwrap();
    assert_eq!(Status::Stalled, status);
    assert_eq!(63, board.solved_count());
    // The scans still recognize each two-cell pair, flag it with both
    // digits, and lock it.
    assert_eq!(num_set![N1, N2], board.cell(L11).flags());
    assert!(board.cell(L11).lock().is_some());
    assert!(board.cell(L11).value().is_none());
    assert!(board.flagged(N1).contains(L11));
    assert!(board.flagged(N2).contains(L12));
  }

  #[test]
  fn unrelated_flag_pairs_dont_shrink_a_block_scan() {
    // Two non-collinear pairings drop flags for 1 onto rows 1 and 2
    // (L11/L22 and L14/L25), while block 3 genuinely has two spots for
    // the symbol, one per flagged row.  The flags come from unrelated
    // groups, so neither row is claimed and the scan must keep both
    // spots as a pair instead of assigning either.
    let mut board = Board::empty();
    board.add_flag(L11, N1);
    board.add_flag(L22, N1);
    board.subscribe_pair(L11, L22);
    board.add_flag(L14, N1);
    board.add_flag(L25, N1);
    board.subscribe_pair(L14, L25);
    for loc in [L18, L19, L27, L28, L29, L37, L39] {
      board.cell_mut(loc).candidates.remove(N1);
    }
    assert!(board.admits(L17, N1));
    assert!(board.admits(L38, N1));

    solve_next(&mut board, N1).unwrap();
    assert_eq!(0, board.solved_count());
    assert!(board.cell(L17).value().is_none());
    assert!(board.cell(L38).value().is_none());
  }

  #[test]
  fn empty_grid_stalls_at_zero() {
    let (status, board) = solve(&Grid::new()).unwrap();
    assert_eq!(Status::Stalled, status);
    assert_eq!(0, board.solved_count());
  }

  #[test]
  fn contradictory_clues() {
    let clues = ("11".to_string() + &".".repeat(79)).parse::<Grid>().unwrap();
    let err = solve(&clues).unwrap_err();
    assert_eq!(L12, err.loc);
    assert_eq!(N1, err.num);
    assert!(err.groups.contains(&R1.group_id()));
    assert!(err.groups.contains(&B1.group_id()));
  }

  #[test]
  fn naked_pair_trims_line() {
    let mut board = Board::empty();
    // Two cells of row 1 narrowed to the same two candidates.
    board.cell_mut(L11).candidates = num_set![N4, N7];
    board.cell_mut(L12).candidates = num_set![N4, N7];
    reduce_possibility(&mut board);
    for loc in [L13, L14, L15, L16, L17, L18, L19] {
      assert!(!board.cell(loc).candidates().contains(N4), "{:?}", loc);
      assert!(!board.cell(loc).candidates().contains(N7), "{:?}", loc);
    }
    // The pair itself keeps both candidates and stays unassigned.
    assert_eq!(num_set![N4, N7], board.cell(L11).candidates());
    assert!(board.cell(L11).value().is_none());
  }

  #[test]
  fn passes_are_idempotent_once_stalled() {
    let mut board = Board::new(&without(&['1', '2'])).unwrap();
    assert_eq!(Status::Stalled, run(&mut board, &mut Quiet).unwrap());
    let mut again = board.clone();
    solve_missing(&mut again).unwrap();
    for num in Num::all() {
      solve_next(&mut again, num).unwrap();
    }
    solve_brutefully(&mut again).unwrap();
    reduce_possibility(&mut again);
    assert_eq!(board, again);
  }

  /// Checks after every pass that no unsolved cell's possibilities grow.
  struct ShrinkTracker {
    last: Vec<NumSet>,
  }
  impl ShrinkTracker {
    fn new(board: &Board) -> Self {
      ShrinkTracker { last: Self::snapshot(board) }
    }
    fn snapshot(board: &Board) -> Vec<NumSet> {
      Loc::all().map(|loc| board.candidates_at(loc)).collect()
    }
  }
  impl SolveObserver for ShrinkTracker {
    fn pass_done(&mut self, pass: Pass, board: &Board) {
      let now = Self::snapshot(board);
      for (loc, (old, new)) in Loc::all().zip(self.last.iter().zip(&now)) {
        if board.cell(loc).value().is_none() {
          assert!(
            (*new - *old).is_empty(),
            "{:?} grew from {:?} to {:?} after {:?}",
            loc,
            old,
            new,
            pass
          );
        }
      }
      self.last = now;
    }
  }

  #[test]
  fn possibilities_only_shrink() {
    let clues = blanked(&[L11, L12, L21, L22, L33, L44, L55, L66]);
    let mut board = Board::new(&clues).unwrap();
    let mut tracker = ShrinkTracker::new(&board);
    let status = run(&mut board, &mut tracker).unwrap();
    assert_eq!(Status::Solved, status);
    assert_valid_solution(&board);
  }

  #[test]
  fn scattered_blanks_solve() {
    let clues = blanked(&[L15, L24, L26]);
    let (status, board) = solve(&clues).unwrap();
    assert_eq!(Status::Solved, status);
    assert_eq!(SOLVED, board.to_grid().to_string());
  }
}
