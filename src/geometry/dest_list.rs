use std::slice;

use crate::core::Square;

/// Upper bound on the destinations any rule can yield on an 8x8 board.
pub const MAX_DESTINATIONS: usize = 8;

/// Ordered, fixed-capacity list of destination squares produced by a geometry rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestList {
    squares: [Square; MAX_DESTINATIONS],
    len: usize,
}

impl std::ops::Index<usize> for DestList {
    type Output = Square;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.len, "DestList index out of bounds");

        &self.squares[index]
    }
}

impl Default for DestList {
    fn default() -> Self {
        DestList::new()
    }
}

impl DestList {
    #[inline]
    pub const fn new() -> DestList {
        DestList {
            squares: [Square::A1; MAX_DESTINATIONS],
            len: 0,
        }
    }

    /// Appends a destination.
    ///
    /// # Panics
    /// Panics if the list is already full; a rule yielding a ninth square is a defect.
    #[inline]
    pub const fn push(&mut self, sq: Square) {
        assert!(self.len < MAX_DESTINATIONS, "geometry rule yielded more than 8 destinations");

        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn get(&self, index: usize) -> Option<Square> {
        if index < self.len {
            Some(self.squares[index])
        } else {
            None
        }
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.iter().any(|&s| s == sq)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Square> {
        self.squares[..self.len].iter()
    }
}

impl<'a> IntoIterator for &'a DestList {
    type Item = &'a Square;
    type IntoIter = slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
