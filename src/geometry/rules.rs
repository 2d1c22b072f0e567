//! # Module: `rules`
//!
//! Piece geometry rules. Each [`Archetype`] maps an origin square to the ordered
//! list of squares the piece reaches on an empty board.
//!
//! Two kinds of rule exist:
//!
//! - **Leapers** (king, knight, pawn captures): a fixed list of offsets, each kept
//!   if it lands on the board. The offset order is the yield order.
//! - **Sliders** (one bishop or rook direction): step repeatedly from the origin
//!   and stop as soon as a step leaves the board. Squares come out nearest first.
//!
//! No rule wraps around an edge, revisits a square or yields the origin.

use super::dest_list::DestList;
use crate::core::{Colour, Direction, Square};

use Direction::*;

/// King offsets, row step -1..=1 outer, column step -1..=1 inner.
const KING_OFFSETS: [Direction; 8] = [SW, S, SE, W, E, NW, N, NE];

const KNIGHT_OFFSETS: [Direction; 8] = [NEE, NWW, SEE, SWW, NNE, NNW, SSE, SSW];

const WHITE_PAWN_OFFSETS: [Direction; 2] = Colour::White.pawn_captures();

const BLACK_PAWN_OFFSETS: [Direction; 2] = Colour::Black.pawn_captures();

/******************************************\
|==========================================|
|                Archetypes                |
|==========================================|
\******************************************/

/// # Archetype representation
///
/// - One movement rule per piece kind; sliding pieces get one rule per direction

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    King, Knight, WhitePawnCapture, BlackPawnCapture,
    BishopRayNE, BishopRaySE, BishopRayNW, BishopRaySW,
    RookRayN, RookRayS, RookRayE, RookRayW,
}

impl Archetype {
    /// Number of elements in the Archetype enum
    pub const NUM: usize = 12;
}

crate::impl_from_to_primitive!(Archetype);
crate::impl_enum_iter!(Archetype);

/// How an archetype produces its destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Single jumps by each offset, filtered to the board
    Leaper(&'static [Direction]),
    /// Repeated steps in one direction until the edge
    Slider(Direction),
}

impl Archetype {
    pub const fn rule(self) -> Rule {
        use Archetype::*;
        match self {
            King => Rule::Leaper(&KING_OFFSETS),
            Knight => Rule::Leaper(&KNIGHT_OFFSETS),
            WhitePawnCapture => Rule::Leaper(&WHITE_PAWN_OFFSETS),
            BlackPawnCapture => Rule::Leaper(&BLACK_PAWN_OFFSETS),

            BishopRayNE => Rule::Slider(NE),
            BishopRaySE => Rule::Slider(SE),
            BishopRayNW => Rule::Slider(NW),
            BishopRaySW => Rule::Slider(SW),

            RookRayN => Rule::Slider(N),
            RookRayS => Rule::Slider(S),
            RookRayE => Rule::Slider(E),
            RookRayW => Rule::Slider(W),
        }
    }

    pub const fn is_slider(self) -> bool {
        matches!(self.rule(), Rule::Slider(_))
    }

    /// All squares reachable from `origin`, in yield order.
    pub const fn destinations(self, origin: Square) -> DestList {
        match self.rule() {
            Rule::Leaper(offsets) => leaper_destinations(origin, offsets),
            Rule::Slider(dir) => ray_destinations(origin, dir),
        }
    }
}

/******************************************\
|==========================================|
|               Rule Bodies                |
|==========================================|
\******************************************/

const fn leaper_destinations(origin: Square, offsets: &[Direction]) -> DestList {
    let mut list = DestList::new();

    let mut i = 0;
    while i < offsets.len() {
        if let Ok(sq) = origin.add(offsets[i]) {
            list.push(sq);
        }
        i += 1;
    }

    list
}

// Starts one step from the origin; the first step off the board ends the ray.
const fn ray_destinations(origin: Square, dir: Direction) -> DestList {
    let mut list = DestList::new();

    let mut current = origin;
    while let Ok(next) = current.add(dir) {
        list.push(next);
        current = next;
    }

    list
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_valid;

    fn squares(archetype: Archetype, origin: Square) -> Vec<Square> {
        archetype.destinations(origin).iter().copied().collect()
    }

    fn is_corner(sq: Square) -> bool {
        matches!(sq.row(), 0 | 7) && matches!(sq.col(), 0 | 7)
    }

    fn is_edge(sq: Square) -> bool {
        matches!(sq.row(), 0 | 7) || matches!(sq.col(), 0 | 7)
    }

    #[test]
    fn test_destinations_stay_on_board() {
        for archetype in Archetype::iter() {
            for origin in Square::iter() {
                for sq in archetype.destinations(origin).iter() {
                    assert!(is_valid(sq.row(), sq.col()));
                }
            }
        }
    }

    #[test]
    fn test_no_origin_no_duplicates() {
        for archetype in Archetype::iter() {
            for origin in Square::iter() {
                let dests = squares(archetype, origin);
                assert!(!dests.contains(&origin), "{archetype:?} from {origin} yields origin");

                let mut sorted = dests.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), dests.len(), "{archetype:?} from {origin} repeats");
            }
        }
    }

    #[test]
    fn test_king_counts() {
        for origin in Square::iter() {
            let expected = if is_corner(origin) {
                3
            } else if is_edge(origin) {
                5
            } else {
                8
            };
            assert_eq!(Archetype::King.destinations(origin).len(), expected, "king on {origin}");
        }
    }

    #[test]
    fn test_knight_counts() {
        for origin in Square::iter() {
            let n = Archetype::Knight.destinations(origin).len();
            assert!(matches!(n, 2 | 3 | 4 | 6 | 8), "knight on {origin} has {n}");

            let deep = (2..=5).contains(&origin.row()) && (2..=5).contains(&origin.col());
            assert_eq!(n == 8, deep, "knight on {origin}");
            assert_eq!(n == 2, is_corner(origin), "knight on {origin}");
        }
    }

    #[test]
    fn test_a1_scenario() {
        assert_eq!(
            squares(Archetype::King, Square::A1),
            vec![Square::B1, Square::A2, Square::B2]
        );
        assert_eq!(
            squares(Archetype::Knight, Square::A1),
            vec![Square::C2, Square::B3]
        );
        assert_eq!(
            squares(Archetype::RookRayN, Square::A1),
            vec![
                Square::A2,
                Square::A3,
                Square::A4,
                Square::A5,
                Square::A6,
                Square::A7,
                Square::A8
            ]
        );
        assert!(Archetype::RookRayW.destinations(Square::A1).is_empty());
        assert!(Archetype::RookRayS.destinations(Square::A1).is_empty());
    }

    #[test]
    fn test_d4_bishop_rays() {
        assert_eq!(
            squares(Archetype::BishopRayNE, Square::D4),
            vec![Square::E5, Square::F6, Square::G7, Square::H8]
        );
        assert_eq!(
            squares(Archetype::BishopRaySW, Square::D4),
            vec![Square::C3, Square::B2, Square::A1]
        );
        assert_eq!(
            squares(Archetype::BishopRayNW, Square::D4),
            vec![Square::C5, Square::B6, Square::A7]
        );
        assert_eq!(
            squares(Archetype::BishopRaySE, Square::D4),
            vec![Square::E3, Square::F2, Square::G1]
        );
    }

    #[test]
    fn test_king_yield_order() {
        assert_eq!(
            squares(Archetype::King, Square::E4),
            vec![
                Square::D3,
                Square::E3,
                Square::F3,
                Square::D4,
                Square::F4,
                Square::D5,
                Square::E5,
                Square::F5
            ]
        );
    }

    #[test]
    fn test_knight_yield_order() {
        assert_eq!(
            squares(Archetype::Knight, Square::E4),
            vec![
                Square::G5,
                Square::C5,
                Square::G3,
                Square::C3,
                Square::F6,
                Square::D6,
                Square::F2,
                Square::D2
            ]
        );
    }

    #[test]
    fn test_pawn_captures_ignore_rank_legality() {
        assert_eq!(
            squares(Archetype::WhitePawnCapture, Square::E4),
            vec![Square::D5, Square::F5]
        );
        assert_eq!(
            squares(Archetype::BlackPawnCapture, Square::E4),
            vec![Square::D3, Square::F3]
        );

        // From the first rank a white pawn still "captures" onto rank 2.
        assert_eq!(
            squares(Archetype::WhitePawnCapture, Square::A1),
            vec![Square::B2]
        );
        // Nothing lies beyond the last rank.
        assert!(Archetype::WhitePawnCapture.destinations(Square::E8).is_empty());
        assert!(Archetype::BlackPawnCapture.destinations(Square::E1).is_empty());
        assert_eq!(
            squares(Archetype::BlackPawnCapture, Square::H8),
            vec![Square::G7]
        );
    }

    #[test]
    fn test_ray_lengths() {
        for archetype in Archetype::iter().filter(|a| a.is_slider()) {
            let Rule::Slider(dir) = archetype.rule() else {
                unreachable!()
            };
            let (drow, dcol) = dir.delta();

            for origin in Square::iter() {
                let steps_to_edge = |pos: i8, d: i8| match d {
                    1 => 7 - pos,
                    -1 => pos,
                    _ => 7,
                };
                let expected = steps_to_edge(origin.row(), drow).min(steps_to_edge(origin.col(), dcol));
                assert_eq!(
                    archetype.destinations(origin).len(),
                    expected as usize,
                    "{archetype:?} from {origin}"
                );
            }
        }
    }

    #[test]
    fn test_rays_step_by_one() {
        for archetype in Archetype::iter().filter(|a| a.is_slider()) {
            for origin in Square::iter() {
                let mut prev = origin;
                for (i, &sq) in archetype.destinations(origin).iter().enumerate() {
                    assert_eq!(Square::distance(origin, sq) as usize, i + 1);
                    assert_eq!(Square::distance(prev, sq), 1);
                    prev = sq;
                }
            }
        }
    }

    #[test]
    fn test_slider_split() {
        assert_eq!(Archetype::iter().filter(|a| a.is_slider()).count(), 8);
        assert!(!Archetype::King.is_slider());
        assert!(Archetype::RookRayE.is_slider());
    }
}
