//! Defines the Grid type, representing the assignments of symbols to the 81
//! locations of a Sudoku grid.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::*;

/// A Sudoku grid: a 9x9 array with each location holding an optional symbol
/// from 1 through 9.  This is the shape that clues come in as and that
/// solutions come out as.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Grid([Option<Num>; 81]);

impl Grid {
  /// Makes an empty Grid.
  pub fn new() -> Grid {
    Grid([None; 81])
  }

  /// Returns the number of locations that have assigned symbols.
  pub fn len(&self) -> usize {
    self.0.iter().filter(|optional| optional.is_some()).count()
  }

  pub fn is_empty(&self) -> bool {
    self.0.iter().all(|optional| optional.is_none())
  }

  /// Iterates the assignments in this grid, in location order.
  pub fn iter(&self) -> impl Iterator<Item = (Loc, Num)> + '_ {
    Loc::all()
      .zip(self.0)
      .filter_map(|(loc, optional)| optional.map(|num| (loc, num)))
  }
}

impl Default for Grid {
  fn default() -> Self {
    Self::new()
  }
}

impl Index<Loc> for Grid {
  type Output = Option<Num>;

  /// Allows `Grid`s to be indexed by `Loc`s.
  fn index(&self, loc: Loc) -> &Option<Num> {
    &self.0[loc.index()]
  }
}

impl IndexMut<Loc> for Grid {
  fn index_mut(&mut self, loc: Loc) -> &mut Option<Num> {
    &mut self.0[loc.index()]
  }
}

impl fmt::Display for Grid {
  /// Prints this grid in row-major order, with `.` for unassigned squares.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for optional in self.0 {
      match optional {
        Some(num) => num.get().fmt(f)?,
        None => '.'.fmt(f)?,
      }
    }
    Ok(())
  }
}

impl fmt::Debug for Grid {
  /// Prints this grid as Ascii art.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let flat = self.to_string();
    let chars: Vec<_> = flat.split("").skip(1).collect();
    let ch = |n| chars[n as usize];
    let subrow = |n| [ch(n), ch(n + 1), ch(n + 2)].join(" ");
    let row = |n| [subrow(n), subrow(n + 3), subrow(n + 6)].join(" | ");
    let band = |n| [row(n), row(n + 9), row(n + 18)].join("\n");
    let grid = [band(0), band(27), band(54)].join("\n- - - + - - - + - - -\n");
    f.write_str(&grid)
  }
}

impl FromStr for Grid {
  type Err = String;

  /// Constructs a Grid from a string, which must contain exactly 81
  /// location characters, plus any number of other characters.
  ///
  /// A location character is `1` through `9`, signifying an assignment of
  /// that digit to the corresponding location, or `0` or `.`, signifying
  /// that the location is blank.
  ///
  /// This method ignores all other characters, which means that strings in
  /// both of Grid's Display and Debug forms are correctly parsed back into
  /// the original grid.
  fn from_str(s: &str) -> Result<Grid, String> {
    let mut i = 0;
    let mut grid = Grid::new();
    for c in s.chars() {
      if c.is_ascii_digit() || c == '.' {
        if i >= Loc::COUNT {
          return Err(format!("More than 81 locations in {}", s));
        }
        if c != '0' && c != '.' {
          // 0 and . are placeholders meaning a blank square.
          grid.0[i] = Num::new(c.to_digit(10).unwrap() as i8);
        }
        i += 1
      }
    }
    if i == Loc::COUNT {
      Ok(grid)
    } else {
      Err(format!("Fewer than 81 locations in {}", s))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  #[test]
  /// Ensures that Option<Num> occupies a single byte.
  fn sized_correctly() {
    use std::mem::size_of;
    assert_eq!(size_of::<Grid>(), Loc::COUNT);
    // Just to validate that size_of works as expected:
    assert_eq!(size_of::<Option<Loc>>(), 2);
  }

  #[test]
  fn order_and_equality() {
    let mut g1 = Grid::new();
    let mut g2 = Grid::new();
    assert_eq!(g1, g2);

    g1[L12] = Some(N5);
    g2[L12] = Some(N1);
    assert!(g2 < g1);
    assert!(g1 > g2);

    g2[L11] = Some(N2);
    assert!(g2 > g1);
    assert!(g1 < g2);

    g1 = g2;
    assert_eq!(g1, g2);
    assert_eq!(g2.len(), 2);
  }

  #[test]
  fn strings() {
    let s = ".1..5..8.4.89.62.1..6...7....5.3.9.....8.7.....1.4.3....4...1..2.93.16.7.7..6..2.";
    let g = s.parse::<Grid>().unwrap();
    assert_eq!(s, g.to_string());
    assert_eq!(s, format!("{}", g));
    let s2 = format!("{:?}", g);
    assert_ne!(s2, s);
    assert_eq!(
      s2, // Note: not a formatting oversight!
      r"
. 1 . | . 5 . | . 8 .
4 . 8 | 9 . 6 | 2 . 1
. . 6 | . . . | 7 . .
- - - + - - - + - - -
. . 5 | . 3 . | 9 . .
. . . | 8 . 7 | . . .
. . 1 | . 4 . | 3 . .
- - - + - - - + - - -
. . 4 | . . . | 1 . .
2 . 9 | 3 . 1 | 6 . 7
. 7 . | . 6 . | . 2 ."[1..]
    );
    let g2 = s2.parse::<Grid>().unwrap();
    assert_eq!(g, g2);
  }

  #[test]
  fn bad_strings() {
    assert!(Grid::from_str("123").is_err());
    let s = ".".repeat(82);
    assert!(Grid::from_str(&s).is_err());
  }

  #[test]
  fn iter() {
    let g = Grid::from_str(
      &("1.3".to_string() + &".".repeat(78)),
    )
    .unwrap();
    assert_eq!(vec![(L11, N1), (L13, N3)], g.iter().collect::<Vec<_>>());
  }
}
