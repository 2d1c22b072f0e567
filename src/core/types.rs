use super::Square;
use thiserror::Error;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    White,
    Black
}

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// The 8 compass directions plus the 8 knight jumps. North increases the row
/// (towards rank 8), east increases the column (towards file h).

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N, S, E, W,
    NE, NW, SE, SW,
    NNE, NNW, NEE, NWW,
    SEE, SWW, SSE, SSW,
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the two pawn capture directions for a colour, towards file a first
    pub const fn pawn_captures(&self) -> [Direction; 2] {
        match self {
            Colour::White => [Direction::NW, Direction::NE],
            Colour::Black => [Direction::SW, Direction::SE],
        }
    }
}

impl Direction {
    /// The `(row, col)` step of the direction
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            N => (1, 0),
            S => (-1, 0),
            E => (0, 1),
            W => (0, -1),

            NE => (1, 1),
            NW => (1, -1),
            SE => (-1, 1),
            SW => (-1, -1),

            NNE => (2, 1),
            NNW => (2, -1),
            NEE => (1, 2),
            NWW => (1, -2),
            SEE => (-1, 2),
            SWW => (-1, -2),
            SSE => (-2, 1),
            SSW => (-2, -1),
        }
    }
}

impl Square {
    /// Try to step from a square by a direction vector
    ///
    /// Fails with [`SquareAddError::OutOfBounds`] instead of wrapping around an edge.
    #[inline]
    pub const fn add(self, rhs: Direction) -> Result<Self, SquareAddError> {
        let (drow, dcol) = rhs.delta();

        match Square::from_coords(self.row() + drow, self.col() + dcol) {
            Some(sq) => Ok(sq),
            None => Err(SquareAddError::OutOfBounds),
        }
    }
}

/******************************************\
|==========================================|
|             Square Add Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareAddError {
    #[error("Square operation resulted in an out-of-bounds position")]
    OutOfBounds,
}
