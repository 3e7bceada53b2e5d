//! The `define_ids!` macro.

/// Defines newtypes that wrap a small integer id.
///
/// You specify each type's name, the int type of the contained id, and the
/// number of distinct values.  Every generated type gets a checked
/// constructor, index conversions, and an iterator over all of its values.
#[macro_export]
macro_rules! define_ids {
  (
    $(
      $(#[$outer:meta])*
      $name:ident: $int:ty[$count:expr];
    )*
  ) => {
    $(
      $(#[$outer])*
      #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, ::serde::Serialize)]
      pub struct $name(pub(crate) $int);

      impl $name {
        /// How many distinct values this type has.
        pub const COUNT: usize = $count;

        /// Makes a new value from its id, when the id is in range.
        pub const fn new(id: $int) -> Option<Self> {
          if id >= 0 && id < $count {
            Some(Self(id))
          } else {
            None
          }
        }

        /// Makes a new value from an array index, when it's in range.
        pub const fn from_index(i: usize) -> Option<Self> {
          if i < $count {
            Some(Self(i as $int))
          } else {
            None
          }
        }

        /// This value's id.
        pub const fn get(self) -> $int {
          self.0
        }

        /// This value's id in a form suitable for indexing arrays.
        pub const fn index(self) -> usize {
          self.0 as usize
        }

        /// This value's ordinal number, which starts at 1.
        pub const fn ordinal(self) -> $int {
          self.0 + 1
        }

        /// Iterates all distinct values in id order.
        pub fn all() -> impl Iterator<Item = Self> {
          (0..$count).map(|i| Self(i as $int))
        }
      }

      impl From<$name> for usize {
        fn from(id: $name) -> usize {
          id.index()
        }
      }
    )*
  };
}
