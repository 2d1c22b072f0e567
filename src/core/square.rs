use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Represents the squares of a chess board, numbered by bit index (a1 = 0, h8 = 63)

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Number of elements in the Square enum
    pub const NUM: usize = 64;
}

crate::impl_from_to_primitive!(Square);
crate::impl_enum_iter!(Square);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation
///
/// - Represents the ranks (rows) of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation
///
/// - Represents the files (columns) of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|             Coordinate Model             |
|==========================================|
\******************************************/

/// Returns true iff `(row, col)` lies on the 8x8 board.
///
/// Coordinates are signed so that a step off either edge can be tested
/// before a `Square` is ever constructed.
#[inline]
pub const fn is_valid(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

impl Square {
    /// Builds a square from a `(row, col)` pair, or `None` if the pair is off the board.
    ///
    /// ## Examples
    ///
    /// ```
    /// use movetables::core::Square;
    ///
    /// assert_eq!(Square::from_coords(0, 0), Some(Square::A1));
    /// assert_eq!(Square::from_coords(3, 3), Some(Square::D4));
    /// assert_eq!(Square::from_coords(8, 0), None);
    /// ```
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if is_valid(row, col) {
            Some(unsafe { Self::from_unchecked((row as u8) * 8 + col as u8) })
        } else {
            None
        }
    }

    /// Row of the square (0 for rank 1, 7 for rank 8)
    #[inline]
    pub const fn row(&self) -> i8 {
        (*self as u8 >> 3) as i8
    }

    /// Column of the square (0 for file a, 7 for file h)
    #[inline]
    pub const fn col(&self) -> i8 {
        (*self as u8 & 0b111) as i8
    }

    /// Bit position of the square in a 64-bit set: `row * 8 + col`
    #[inline]
    pub const fn bit_index(&self) -> usize {
        *self as usize
    }

    /// Returns the rank of a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use movetables::core::{Square, Rank};
    ///
    /// assert_eq!(Square::A1.rank(), Rank::Rank1);
    /// assert_eq!(Square::E4.rank(), Rank::Rank4);
    /// assert_eq!(Square::H8.rank(), Rank::Rank8);
    /// ```
    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_unchecked(self.row() as u8) }
    }

    /// Returns the file of a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use movetables::core::{Square, File};
    ///
    /// assert_eq!(Square::A1.file(), File::FileA);
    /// assert_eq!(Square::E4.file(), File::FileE);
    /// assert_eq!(Square::H8.file(), File::FileH);
    /// ```
    pub const fn file(&self) -> File {
        unsafe { File::from_unchecked(self.col() as u8) }
    }

    /// Returns the absolute distance in the ranks of two squares
    pub const fn rank_dist(sq1: Square, sq2: Square) -> u8 {
        (sq1.rank() as u8).abs_diff(sq2.rank() as u8)
    }

    /// Returns the absolute distance in the files of two squares
    pub const fn file_dist(sq1: Square, sq2: Square) -> u8 {
        (sq1.file() as u8).abs_diff(sq2.file() as u8)
    }

    /// Chebyshev (king-move) distance between two squares
    ///
    /// ## Examples
    ///
    /// ```
    /// use movetables::core::Square;
    ///
    /// assert_eq!(Square::distance(Square::A1, Square::H8), 7);
    /// assert_eq!(Square::distance(Square::D4, Square::E6), 2);
    /// ```
    pub const fn distance(sq1: Square, sq2: Square) -> u8 {
        let rank_dist = Square::rank_dist(sq1, sq2);
        let file_dist = Square::file_dist(sq1, sq2);

        if rank_dist > file_dist {
            rank_dist
        } else {
            file_dist
        }
    }

    /// Combines a pair of file and rank to create a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use movetables::core::{Square, File, Rank};
    ///
    /// assert_eq!(Square::from_parts(File::FileA, Rank::Rank1), Square::A1);
    /// assert_eq!(Square::from_parts(File::FileE, Rank::Rank4), Square::E4);
    /// ```
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        let index = ((rank as u8) << 3) + (file as u8);
        unsafe { Self::from_unchecked(index) }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    /// Displays the file in the form of its chess board representation (FileA => 'a')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    /// Displays the rank in the form of its chess board representation (Rank1 => '1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Square {
    /// Displays the square in the form of its chess board representation (Square::A1 => "a1")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for File {
    type Err = ParseFileError;

    /// Parses the file string into a file, with error checking
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), None) = (chars.next(), chars.next()) else {
            return Err(ParseFileError::InvalidLength(s.len()));
        };

        match file_char {
            'a'..='h' => Ok(unsafe { File::from_unchecked(file_char as u8 - b'a') }),
            _ => Err(ParseFileError::InvalidChar(file_char)),
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = ParseRankError;

    /// Parses the rank string into a rank, with error checking
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_char), None) = (chars.next(), chars.next()) else {
            return Err(ParseRankError::InvalidLength(s.len()));
        };

        match rank_char {
            '1'..='8' => Ok(unsafe { Rank::from_unchecked(rank_char as u8 - b'1') }),
            _ => Err(ParseRankError::InvalidChar(rank_char)),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses algebraic notation ("e4") into a square, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use movetables::core::{Square, ParseSquareError};
    ///
    /// assert_eq!("a1".parse::<Square>().unwrap(), Square::A1);
    /// assert!(matches!("e9".parse::<Square>(), Err(ParseSquareError::InvalidRankChar('9'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let &[file_char, rank_char] = chars.as_slice() else {
            return Err(ParseSquareError::InvalidLength(s.len()));
        };

        let file = file_char
            .to_string()
            .parse::<File>()
            .map_err(|_| ParseSquareError::InvalidFileChar(file_char))?;
        let rank = rank_char
            .to_string()
            .parse::<Rank>()
            .map_err(|_| ParseSquareError::InvalidRankChar(rank_char))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    #[error("Invalid length for file string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    #[error("Invalid length for rank string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
