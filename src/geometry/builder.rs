//! # Module: `builder`
//!
//! Assembles geometry rules into the two lookup-table shapes:
//!
//! - [`BitboardTable`]: per origin, the union of all destinations. Used where the
//!   consumer only needs a membership test (leaper captures).
//! - [`RayTable`]: per origin, a [`RaySequence`] of exactly [`RAY_LEN`] entries,
//!   nearest first, padded with [`RayEntry::SENTINEL`]. A consumer walks it and
//!   stops at the first sentinel or the first occupied square.
//!
//! Both builders are `const fn`, so every table is computed during compilation.

use super::dest_list::DestList;
use super::rules::Archetype;
use crate::core::{Bitboard, RayEntry, Square};

/// Fixed width of every ray sequence.
pub const RAY_LEN: usize = 8;

/// Bitboard table indexed by origin bit index
pub type BitboardTable = [Bitboard; Square::NUM];

/// Ray table indexed by origin bit index
pub type RayTable = [RaySequence; Square::NUM];

/******************************************\
|==========================================|
|               Ray Sequence               |
|==========================================|
\******************************************/

/// The destinations of one direction (or one leaper) from one origin, padded to
/// [`RAY_LEN`] with sentinels. No real entry ever follows a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RaySequence(pub [RayEntry; RAY_LEN]);

impl RaySequence {
    /// A sequence holding only sentinels.
    pub const EMPTY: RaySequence = RaySequence([RayEntry::SENTINEL; RAY_LEN]);

    /// Encodes `dests` in order and pads the remainder with sentinels.
    pub const fn from_dests(dests: &DestList) -> Self {
        assert!(dests.len() <= RAY_LEN, "ray sequence wider than 8 entries");

        let mut entries = [RayEntry::SENTINEL; RAY_LEN];
        let mut i = 0;
        while i < dests.len() {
            if let Some(sq) = dests.get(i) {
                entries[i] = RayEntry::new(sq);
            }
            i += 1;
        }

        RaySequence(entries)
    }

    /// Number of real entries before the first sentinel.
    pub const fn real_len(&self) -> usize {
        let mut n = 0;
        while n < RAY_LEN && !self.0[n].is_sentinel() {
            n += 1;
        }
        n
    }

    /// The real entries, nearest first.
    pub fn iter_real(&self) -> impl Iterator<Item = &RayEntry> {
        self.0.iter().take_while(|entry| !entry.is_sentinel())
    }

    /// Union of all real entries.
    pub fn bb(&self) -> Bitboard {
        self.iter_real().fold(Bitboard::EMPTY, |acc, entry| acc | entry.bb)
    }

    /// Walks the sequence the way a move generator does: every square up to and
    /// including the first one in `occupied`, stopping early at a sentinel.
    ///
    /// ## Examples
    ///
    /// ```
    /// use movetables::core::{Bitboard, Square};
    /// use movetables::geometry::ROOK_RAY_N;
    ///
    /// let ray = &ROOK_RAY_N[Square::A1.bit_index()];
    /// let reach = ray.march(Square::A4.bb());
    /// assert_eq!(reach, Bitboard::from([Square::A2, Square::A3, Square::A4]));
    /// ```
    pub fn march(&self, occupied: Bitboard) -> Bitboard {
        let mut reach = Bitboard::EMPTY;
        for entry in self.iter_real() {
            reach |= entry.bb;
            if (entry.bb & occupied).is_occupied() {
                break;
            }
        }
        reach
    }
}

impl Default for RaySequence {
    fn default() -> Self {
        RaySequence::EMPTY
    }
}

impl std::ops::Index<usize> for RaySequence {
    type Output = RayEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/******************************************\
|==========================================|
|              Table Builders              |
|==========================================|
\******************************************/

/// Unions each origin's destinations into one bitboard.
pub const fn build_bitboard_table(archetype: Archetype) -> BitboardTable {
    let mut table = [Bitboard::EMPTY; Square::NUM];

    let mut row = 0;
    while row < 8 {
        let mut col = 0;
        while col < 8 {
            let Some(origin) = Square::from_coords(row, col) else {
                unreachable!()
            };

            let dests = archetype.destinations(origin);
            let mut bb = Bitboard::EMPTY;
            let mut i = 0;
            while i < dests.len() {
                if let Some(sq) = dests.get(i) {
                    bb.set(sq);
                }
                i += 1;
            }
            table[origin.bit_index()] = bb;

            col += 1;
        }
        row += 1;
    }

    table
}

/// Encodes each origin's destinations as a padded ray sequence.
pub const fn build_ray_table(archetype: Archetype) -> RayTable {
    let mut table = [RaySequence::EMPTY; Square::NUM];

    let mut row = 0;
    while row < 8 {
        let mut col = 0;
        while col < 8 {
            let Some(origin) = Square::from_coords(row, col) else {
                unreachable!()
            };

            table[origin.bit_index()] = RaySequence::from_dests(&archetype.destinations(origin));

            col += 1;
        }
        row += 1;
    }

    table
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
