use std::iter::FusedIterator;

use crate::{Pos, BOARD_SIZE};

/// A compact set of board cells.
///
/// Allows intersection/union with other such sets via bitwise ops.
/// Also implements [`IntoIterator`], yielding cells in row-major order.
///
/// ```
/// use sequence::{CellSet, Pos};
/// let mut set = CellSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CellSet`.
/// set = set.insert(Pos::new(3, 4));
/// set = set.insert(Pos::new(3, 4));  // Inserting a second time has no effect
/// set = set.insert(Pos::new(0, 1));
/// assert_eq!(Vec::from_iter(set), vec![Pos::new(0, 1), Pos::new(3, 4)]);
/// ```
///
/// # Note on immutability
///
/// Like the other small set types here, "mutating" methods return a
/// new value instead of really mutating in-place (except for `std::ops::BitXxxAssign` trait methods).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    // Only the low 100 bits are used.
    bits: u128,
}

impl CellSet {
    /// Creates a new, empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, pos: Pos) -> bool {
        (self.bits & (1u128 << pos.index())) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, pos: Pos) -> Self {
        Self {
            bits: self.bits | (1u128 << pos.index()),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, pos: Pos) -> Self {
        Self {
            bits: self.bits & !(1u128 << pos.index()),
        }
    }
}

impl std::ops::BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl std::ops::BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl FromIterator<Pos> for CellSet {
    fn from_iter<T: IntoIterator<Item = Pos>>(iter: T) -> Self {
        let mut bits = 0;
        for pos in iter {
            bits |= 1u128 << pos.index();
        }
        Self { bits }
    }
}

impl IntoIterator for CellSet {
    type Item = Pos;

    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellSetIter { bits: self.bits }
    }
}

/// Iterator for a [`CellSet`] that returns cells in row-major order.
#[derive(Clone, Copy, Debug)]
pub struct CellSetIter {
    bits: u128,
}

impl Iterator for CellSetIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let idx = self.bits.trailing_zeros() as i8;
            self.bits ^= 1u128 << idx;
            Some(Pos::new(idx / BOARD_SIZE, idx % BOARD_SIZE))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for CellSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for CellSetIter {}
