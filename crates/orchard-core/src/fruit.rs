//! Fruit categories and half-unit tallies.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A fruit category. Always a positive id; an empty cell has no type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FruitType(u32);

impl FruitType {
    /// Category for a raw cell value, or `None` for an empty cell.
    #[inline]
    pub const fn new(id: u32) -> Option<Self> {
        if id == 0 { None } else { Some(Self(id)) }
    }

    /// The raw category id.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FruitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A non-negative half-integer, stored in half units.
///
/// Collected counts become fractional when both players take the same fruit
/// on the same turn, and a category's win count is half of its total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Count(u32);

impl Count {
    pub const ZERO: Self = Self(0);
    pub const HALF: Self = Self(1);
    pub const ONE: Self = Self(2);

    /// A count of `halves / 2`.
    #[inline]
    pub const fn from_halves(halves: u32) -> Self {
        Self(halves)
    }

    /// A whole count of `n`.
    #[inline]
    pub const fn whole(n: u32) -> Self {
        Self(n * 2)
    }

    /// Number of half units.
    #[inline]
    pub const fn halves(self) -> u32 {
        self.0
    }
}

impl Add for Count {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Count {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}
