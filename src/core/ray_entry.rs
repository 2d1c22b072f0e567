//! Encoding of a single destination square for ray tables.
//!
//! A destination is stored twice: as a single-bit [`Bitboard`] for occupancy
//! tests, and as its 0x88 address (`row * 16 + col`) so the consumer can name
//! the square without a bit scan. The address `0x88` never denotes a real
//! square and marks padding.

use super::{Bitboard, Square};

/// The 0x88 address reserved for "no square".
pub const NO_SQUARE: u8 = 0x88;

impl Square {
    /// The 0x88 address of the square: `row * 16 + col`
    ///
    /// ## Examples
    ///
    /// ```
    /// use movetables::core::Square;
    ///
    /// assert_eq!(Square::A1.sq88(), 0x00);
    /// assert_eq!(Square::D4.sq88(), 0x33);
    /// assert_eq!(Square::H8.sq88(), 0x77);
    /// ```
    #[inline]
    pub const fn sq88(&self) -> u8 {
        (self.row() as u8) * 16 + self.col() as u8
    }

    /// Decodes a 0x88 address back into a square, `None` for off-board addresses and [`NO_SQUARE`].
    #[inline]
    pub const fn from_sq88(addr: u8) -> Option<Self> {
        if addr & NO_SQUARE != 0 {
            return None;
        }
        Square::from_coords((addr >> 4) as i8, (addr & 0x0F) as i8)
    }
}

/// One step of a ray: the destination as a bitboard and as a 0x88 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RayEntry {
    pub bb: Bitboard,
    pub sq88: u8,
}

impl RayEntry {
    /// Padding entry terminating a ray: no bits, address `0x88`.
    pub const SENTINEL: RayEntry = RayEntry {
        bb: Bitboard::EMPTY,
        sq88: NO_SQUARE,
    };

    /// Encodes a real destination square.
    #[inline]
    pub const fn new(sq: Square) -> Self {
        RayEntry {
            bb: sq.bb(),
            sq88: sq.sq88(),
        }
    }

    #[inline]
    pub const fn is_sentinel(&self) -> bool {
        self.sq88 == NO_SQUARE
    }

    /// The destination square, or `None` for the sentinel.
    #[inline]
    pub const fn square(&self) -> Option<Square> {
        Square::from_sq88(self.sq88)
    }
}
