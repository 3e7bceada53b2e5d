//! The `define_set_operators!` macro, shared by the bit-set newtypes.

/// Adds the set-algebra operators to a bit-set newtype over a single
/// backing integer.  `$mask` is the bit pattern of the full universe,
/// which keeps complements from escaping it.
#[macro_export]
macro_rules! define_set_operators {
  ($type:ident, $mask:expr) => {
    impl std::ops::BitAnd for $type {
      type Output = Self;
      fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
      }
    }
    impl std::ops::BitAndAssign for $type {
      fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
      }
    }
    impl std::ops::BitOr for $type {
      type Output = Self;
      fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
      }
    }
    impl std::ops::BitOrAssign for $type {
      fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
      }
    }
    impl std::ops::BitXor for $type {
      type Output = Self;
      fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
      }
    }
    impl std::ops::BitXorAssign for $type {
      fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0
      }
    }
    // The backing ints differ in width between the set types, so these
    // can't live on a shared trait impl; each type instantiates its own.
    impl std::ops::Sub for $type {
      type Output = Self;
      fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
      }
    }
    impl std::ops::SubAssign for $type {
      fn sub_assign(&mut self, rhs: Self) {
        self.0 &= !rhs.0
      }
    }
    impl std::ops::Not for $type {
      type Output = Self;
      fn not(self) -> Self {
        Self(self.0 ^ $mask)
      }
    }
  };
}
