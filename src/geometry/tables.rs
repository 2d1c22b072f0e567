//! # Module: `tables`
//!
//! The fourteen precomputed lookup tables, indexed by origin bit index, plus
//! [`TableId`] to enumerate them in their canonical emit order.
//!
//! - **Bitboard tables**: `KING_CAPTURES`, `KNIGHT_CAPTURES`,
//!   `WHITE_PAWN_CAPTURES`, `BLACK_PAWN_CAPTURES`.
//! - **Ray tables**: `KING_MOVES`, `KNIGHT_MOVES`, `BISHOP_RAY_{NE,SE,NW,SW}`,
//!   `ROOK_RAY_{N,S,E,W}`.

use super::builder::{BitboardTable, RayTable, build_bitboard_table, build_ray_table};
use super::rules::Archetype;

/******************************************\
|==========================================|
|              Leaper Tables               |
|==========================================|
\******************************************/

pub const KING_CAPTURES: BitboardTable = build_bitboard_table(Archetype::King);
pub const KING_MOVES: RayTable = build_ray_table(Archetype::King);

pub const KNIGHT_CAPTURES: BitboardTable = build_bitboard_table(Archetype::Knight);
pub const KNIGHT_MOVES: RayTable = build_ray_table(Archetype::Knight);

pub const WHITE_PAWN_CAPTURES: BitboardTable = build_bitboard_table(Archetype::WhitePawnCapture);
pub const BLACK_PAWN_CAPTURES: BitboardTable = build_bitboard_table(Archetype::BlackPawnCapture);

/******************************************\
|==========================================|
|               Slider Rays                |
|==========================================|
\******************************************/

pub const BISHOP_RAY_NE: RayTable = build_ray_table(Archetype::BishopRayNE);
pub const BISHOP_RAY_SE: RayTable = build_ray_table(Archetype::BishopRaySE);
pub const BISHOP_RAY_NW: RayTable = build_ray_table(Archetype::BishopRayNW);
pub const BISHOP_RAY_SW: RayTable = build_ray_table(Archetype::BishopRaySW);

pub const ROOK_RAY_N: RayTable = build_ray_table(Archetype::RookRayN);
pub const ROOK_RAY_S: RayTable = build_ray_table(Archetype::RookRayS);
pub const ROOK_RAY_E: RayTable = build_ray_table(Archetype::RookRayE);
pub const ROOK_RAY_W: RayTable = build_ray_table(Archetype::RookRayW);

/******************************************\
|==========================================|
|               Table Catalogue            |
|==========================================|
\******************************************/

/// The two table layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// `Bitboard[64]`
    Bitboards,
    /// `RaySequence[64]`
    RaySequences,
}

/// Borrowed view of one of the tables.
#[derive(Debug, Clone, Copy)]
pub enum Table {
    Bitboards(&'static BitboardTable),
    RaySequences(&'static RayTable),
}

/// # Table identifiers
///
/// - Names every generated table, in emit order

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    KingCaptures, KingMoves,
    KnightCaptures, KnightMoves,
    WhitePawnCaptures, BlackPawnCaptures,
    BishopRayNE, BishopRaySE, BishopRayNW, BishopRaySW,
    RookRayN, RookRayS, RookRayE, RookRayW,
}

impl TableId {
    /// Number of elements in the TableId enum
    pub const NUM: usize = 14;
}

crate::impl_from_to_primitive!(TableId);
crate::impl_enum_iter!(TableId);

impl TableId {
    /// The table's symbol name, e.g. `"BISHOP_RAY_NE"`.
    pub const fn name(self) -> &'static str {
        use TableId::*;
        match self {
            KingCaptures => "KING_CAPTURES",
            KingMoves => "KING_MOVES",
            KnightCaptures => "KNIGHT_CAPTURES",
            KnightMoves => "KNIGHT_MOVES",
            WhitePawnCaptures => "WHITE_PAWN_CAPTURES",
            BlackPawnCaptures => "BLACK_PAWN_CAPTURES",
            BishopRayNE => "BISHOP_RAY_NE",
            BishopRaySE => "BISHOP_RAY_SE",
            BishopRayNW => "BISHOP_RAY_NW",
            BishopRaySW => "BISHOP_RAY_SW",
            RookRayN => "ROOK_RAY_N",
            RookRayS => "ROOK_RAY_S",
            RookRayE => "ROOK_RAY_E",
            RookRayW => "ROOK_RAY_W",
        }
    }

    /// The rule the table is built from.
    pub const fn archetype(self) -> Archetype {
        use TableId::*;
        match self {
            KingCaptures | KingMoves => Archetype::King,
            KnightCaptures | KnightMoves => Archetype::Knight,
            WhitePawnCaptures => Archetype::WhitePawnCapture,
            BlackPawnCaptures => Archetype::BlackPawnCapture,
            BishopRayNE => Archetype::BishopRayNE,
            BishopRaySE => Archetype::BishopRaySE,
            BishopRayNW => Archetype::BishopRayNW,
            BishopRaySW => Archetype::BishopRaySW,
            RookRayN => Archetype::RookRayN,
            RookRayS => Archetype::RookRayS,
            RookRayE => Archetype::RookRayE,
            RookRayW => Archetype::RookRayW,
        }
    }

    pub const fn shape(self) -> TableShape {
        match self.table() {
            Table::Bitboards(_) => TableShape::Bitboards,
            Table::RaySequences(_) => TableShape::RaySequences,
        }
    }

    pub const fn table(self) -> Table {
        use TableId::*;
        match self {
            KingCaptures => Table::Bitboards(&KING_CAPTURES),
            KingMoves => Table::RaySequences(&KING_MOVES),
            KnightCaptures => Table::Bitboards(&KNIGHT_CAPTURES),
            KnightMoves => Table::RaySequences(&KNIGHT_MOVES),
            WhitePawnCaptures => Table::Bitboards(&WHITE_PAWN_CAPTURES),
            BlackPawnCaptures => Table::Bitboards(&BLACK_PAWN_CAPTURES),
            BishopRayNE => Table::RaySequences(&BISHOP_RAY_NE),
            BishopRaySE => Table::RaySequences(&BISHOP_RAY_SE),
            BishopRayNW => Table::RaySequences(&BISHOP_RAY_NW),
            BishopRaySW => Table::RaySequences(&BISHOP_RAY_SW),
            RookRayN => Table::RaySequences(&ROOK_RAY_N),
            RookRayS => Table::RaySequences(&ROOK_RAY_S),
            RookRayE => Table::RaySequences(&ROOK_RAY_E),
            RookRayW => Table::RaySequences(&ROOK_RAY_W),
        }
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bitboard, RayEntry, Square};

    #[test]
    fn test_catalogue_shapes() {
        let bitboards: Vec<&str> = TableId::iter()
            .filter(|id| id.shape() == TableShape::Bitboards)
            .map(TableId::name)
            .collect();
        assert_eq!(
            bitboards,
            vec![
                "KING_CAPTURES",
                "KNIGHT_CAPTURES",
                "WHITE_PAWN_CAPTURES",
                "BLACK_PAWN_CAPTURES"
            ]
        );
        assert_eq!(TableId::iter().count(), 14);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = TableId::iter().map(TableId::name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TableId::NUM);
    }

    #[test]
    fn test_a1_tables() {
        let a1 = Square::A1.bit_index();

        assert_eq!(
            KING_CAPTURES[a1],
            Bitboard::from([Square::B1, Square::A2, Square::B2])
        );
        assert_eq!(KING_CAPTURES[a1], Bitboard(0x302));
        assert_eq!(KNIGHT_CAPTURES[a1], Bitboard::from([Square::B3, Square::C2]));

        let north = &ROOK_RAY_N[a1];
        assert_eq!(north.real_len(), 7);
        for (i, entry) in north.iter_real().enumerate() {
            assert_eq!(entry.square(), Square::from_coords(i as i8 + 1, 0));
        }
        assert_eq!(north[7], RayEntry::SENTINEL);

        assert!(ROOK_RAY_W[a1].0.iter().all(|e| *e == RayEntry::SENTINEL));
        assert!(ROOK_RAY_S[a1].0.iter().all(|e| *e == RayEntry::SENTINEL));
    }

    #[test]
    fn test_d4_bishop_rays() {
        let d4 = Square::D4.bit_index();

        let ne: Vec<Square> = BISHOP_RAY_NE[d4].iter_real().filter_map(RayEntry::square).collect();
        assert_eq!(ne, vec![Square::E5, Square::F6, Square::G7, Square::H8]);
        assert!(BISHOP_RAY_NE[d4].0[4..].iter().all(|e| e.is_sentinel()));

        let sw: Vec<u8> = BISHOP_RAY_SW[d4].0.iter().map(|e| e.sq88).collect();
        assert_eq!(sw, vec![0x22, 0x11, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88]);
    }

    #[test]
    fn test_bishop_ray_totals() {
        let rays = [&BISHOP_RAY_NE, &BISHOP_RAY_SE, &BISHOP_RAY_NW, &BISHOP_RAY_SW];
        for origin in Square::iter() {
            let (row, col) = (origin.row() as usize, origin.col() as usize);
            let expected = (7 - row).min(7 - col) + row.min(7 - col) + (7 - row).min(col) + row.min(col);
            let total: usize = rays.iter().map(|t| t[origin.bit_index()].real_len()).sum();
            assert_eq!(total, expected, "bishop from {origin}");
        }
    }

    #[test]
    fn test_rook_rays_cover_fourteen_squares() {
        let rays = [&ROOK_RAY_N, &ROOK_RAY_S, &ROOK_RAY_E, &ROOK_RAY_W];
        for origin in Square::iter() {
            let total: usize = rays.iter().map(|t| t[origin.bit_index()].real_len()).sum();
            assert_eq!(total, 14);
        }
    }

    #[test]
    fn test_pawn_tables_mirror() {
        for origin in Square::iter() {
            let white = WHITE_PAWN_CAPTURES[origin.bit_index()];
            let black = BLACK_PAWN_CAPTURES[origin.bit_index()];
            match origin.row() {
                0 => assert!(black.is_empty()),
                7 => assert!(white.is_empty()),
                _ => assert_eq!(white.count_bits(), black.count_bits()),
            }
        }
        assert_eq!(
            WHITE_PAWN_CAPTURES[Square::E4.bit_index()],
            Bitboard::from([Square::D5, Square::F5])
        );
        assert_eq!(BLACK_PAWN_CAPTURES[Square::A5.bit_index()], Square::B4.bb());
    }

    #[test]
    fn test_table_view_matches_constants() {
        for id in TableId::iter() {
            match id.table() {
                Table::Bitboards(t) => assert_eq!(*t, build_bitboard_table(id.archetype())),
                Table::RaySequences(t) => assert_eq!(*t, build_ray_table(id.archetype())),
            }
        }
    }
}
