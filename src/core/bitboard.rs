use std::fmt;

use super::{File, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// Represents a 64-bit bitboard, a set of squares on the chessboard.
/// Each bit corresponds to a square by bit index, from A1 (LSB) to H8 (MSB).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

crate::impl_bit_ops!(Bitboard);

/******************************************\
|==========================================|
|           Bitboard Constants             |
|==========================================|
\******************************************/

impl Bitboard {
    /// An empty bitboard, with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A full bitboard, with all 64 bits set.
    pub const FULL: Bitboard = Bitboard(!Self::EMPTY.0);

    /// A bitboard with only the A1 square set.
    pub const A1: Bitboard = Bitboard(1);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Converts a `Square` into a `Bitboard` with only that square's bit set.
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::A1.0 << *self as u8)
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for square in squares {
            bb.set(square);
        }
        bb
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for square in iter {
            bb.set(square);
        }
        bb
    }
}

/******************************************\
|==========================================|
|        Bitboard Implementation         |
|==========================================|
\******************************************/

impl Bitboard {
    /// Finds the least significant bit (LSB) set in the bitboard and returns its corresponding `Square`.
    /// Returns `None` if the bitboard is empty.
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => unsafe { Some(Square::from_unchecked(bits.trailing_zeros() as u8)) },
        }
    }

    /// Finds and removes (clears) the least significant bit (LSB) from the bitboard,
    /// returning its corresponding `Square`. Returns `None` if the bitboard was empty.
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        let lsb = self.lsb();
        self.0 &= self.0.wrapping_sub(1);
        lsb
    }

    /// Counts the number of set bits (population count) in the bitboard.
    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    /// Checks if the bitboard is empty (no bits set).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the bitboard has at least one bit set.
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.0 != 0
    }

    /// Checks if the bit corresponding to the given `Square` is set.
    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        (self.0 & square.bb().0) != 0
    }

    /// Sets the bit corresponding to the given `Square`.
    #[inline]
    pub const fn set(&mut self, square: Square) {
        self.0 |= square.bb().0;
    }

    /// Checks if exactly one bit is set in the bitboard.
    #[inline]
    pub const fn is_singleton(&self) -> bool {
        self.0 != 0 && self.0 & self.0.wrapping_sub(1) == 0
    }

    /// Iterates over each set bit in the bitboard, calling the provided function `f` with the `Square` for each.
    #[inline]
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Square),
    {
        let mut bb = *self;
        while let Some(sq) = bb.pop_lsb() {
            f(sq);
        }
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    /// Bit-scans the set, yielding squares in increasing bit index.
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count_bits() as usize;
        (n, Some(n))
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = if self.contains(square) { " 1 " } else { "   " };
                write!(f, "{}|", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Bitboard: {:#x}", self.0)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
