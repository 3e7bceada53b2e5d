//! Defines the Num type, which represents the symbols written in a Sudoku,
//! and NumSet, the candidate and flag sets the solver tracks for each cell.

use crate::define_set_operators;
use core::fmt;
use paste::paste;
use seq_macro::seq;
use serde::Serialize;
use static_assertions::const_assert_eq;
use std::num::NonZeroI8;

/// Identifies one of the 9 symbols that can occupy a location of a Sudoku
/// grid.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Num(NonZeroI8);

// The board stores 81 optional symbols, so the niche must hold.
const_assert_eq!(std::mem::size_of::<Option<Num>>(), 1);

// Constant Num values, N1 through N9.
seq!(K in 1..=9 {
    paste! {
        pub const [<N K>]: Num = match NonZeroI8::new(K) {
            Some(n) => Num(n),
            None => unreachable!(),
        };
    }
});

impl Num {
  /// How many distinct symbols there are.
  pub const COUNT: usize = 9;

  /// Makes an optional Num from an int, present when it's in 1..=9 and
  /// absent otherwise.
  pub fn new(num: i8) -> Option<Self> {
    if (1..=9).contains(&num) {
      NonZeroI8::new(num).map(Num)
    } else {
      None
    }
  }

  /// Makes an optional Num from an array index in 0..9.
  pub fn from_index(i: usize) -> Option<Self> {
    if i < 9 {
      Self::new(i as i8 + 1)
    } else {
      None
    }
  }

  /// Returns the int that this Num wraps, which is in 1..=9.
  pub fn get(self) -> i8 {
    self.0.get()
  }

  /// Returns the number to use when indexing arrays by `Num`s.
  pub fn index(self) -> usize {
    (self.get() - 1) as usize
  }

  /// Iterates all distinct `Num`s, 1 through 9.
  pub fn all() -> impl Iterator<Item = Self> {
    (1..=9).filter_map(Self::new)
  }

  /// Returns a singleton set containing just this symbol.
  pub fn as_set(self) -> NumSet {
    NumSet::singleton(self)
  }
}

impl fmt::Debug for Num {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "N{}", self.get())
  }
}

impl fmt::Display for Num {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.get())
  }
}

/// A set of `Num`s, stored as 9 bits.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct NumSet(u16);

const MASK: u16 = (1 << 9) - 1;

impl NumSet {
  /// Makes a new empty NumSet.
  pub const fn new() -> Self {
    NumSet(0)
  }

  /// Makes a new single-valued NumSet.
  pub fn singleton(num: Num) -> Self {
    NumSet(1 << num.index())
  }

  /// Makes a new NumSet containing all nine symbols.
  pub const fn all() -> Self {
    NumSet(MASK)
  }

  /// Tells whether this set is empty.
  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// How many symbols are in this set.
  pub fn len(self) -> usize {
    self.0.count_ones() as usize
  }

  /// Whether the given symbol is in this set.
  pub fn contains(self, num: Num) -> bool {
    self.0 & 1 << num.index() != 0
  }

  /// Adds a symbol.  Tells whether it was previously absent.
  pub fn insert(&mut self, num: Num) -> bool {
    let old = self.0;
    self.0 |= 1 << num.index();
    self.0 != old
  }

  /// Removes a symbol.  Tells whether it was previously present.
  pub fn remove(&mut self, num: Num) -> bool {
    let old = self.0;
    self.0 &= !(1 << num.index());
    self.0 != old
  }

  /// The smallest symbol in this set, if there is one.
  pub fn smallest(self) -> Option<Num> {
    Num::from_index(self.0.trailing_zeros() as usize)
  }

  /// The sole symbol, when this is a singleton set.
  pub fn single(self) -> Option<Num> {
    if self.len() == 1 {
      self.smallest()
    } else {
      None
    }
  }

  /// Iterates this set's symbols in increasing order.
  pub fn iter(self) -> impl Iterator<Item = Num> {
    Num::all().filter(move |&num| self.contains(num))
  }
}

impl FromIterator<Num> for NumSet {
  fn from_iter<I: IntoIterator<Item = Num>>(iter: I) -> Self {
    let mut set = Self::new();
    for num in iter {
      set.insert(num);
    }
    set
  }
}

/// Returns a NumSet containing the given symbols.
#[macro_export]
macro_rules! num_set {
  ($($num:expr),*) => {
    $crate::core::NumSet::from_iter([$($num),*])
  };
}

define_set_operators!(NumSet, MASK);

impl fmt::Debug for NumSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    write!(f, "{{")?;
    for num in self.iter() {
      if first {
        first = false;
      } else {
        write!(f, ", ")?;
      }
      write!(f, "{:?}", num)?;
    }
    write!(f, "}}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn check_eq(set: NumSet, nums: &[Num]) {
    let contents: Vec<_> = set.iter().collect();
    assert_eq!(contents[..], *nums);
  }

  #[test]
  fn basics() {
    let mut set = NumSet::new();
    assert!(set.insert(N1));
    assert!(set.insert(N2));
    assert!(set.insert(N3));
    assert!(!set.insert(N3));
    check_eq(set, &[N1, N2, N3]);

    assert!(!set.remove(N4));
    assert!(set.remove(N2));
    check_eq(set, &[N1, N3]);
  }

  #[test]
  fn ops() {
    let mut set1 = N1.as_set();
    let mut set2 = N2.as_set();
    let set3 = set1 | set2;
    check_eq(set3, &[N1, N2]);
    assert_eq!(set1, set3 ^ set2);

    set1 |= N7.as_set();
    set2 ^= N8.as_set();
    check_eq(NumSet::all() & !(set1 ^ set2), &[N3, N4, N5, N6, N9]);
    check_eq(set3 - set2, &[N1]);
  }

  #[test]
  fn singles() {
    assert_eq!(None, NumSet::new().single());
    assert_eq!(Some(N4), N4.as_set().single());
    assert_eq!(None, num_set![N4, N7].single());
    assert_eq!(Some(N4), num_set![N4, N7].smallest());
  }
}
