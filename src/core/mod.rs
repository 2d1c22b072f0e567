// Core module exports

mod macros;

// Board geometry submodules
pub mod bitboard;
pub mod ray_entry;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use bitboard::Bitboard;
pub use ray_entry::{NO_SQUARE, RayEntry};
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square, is_valid};
pub use types::{Colour, Direction, SquareAddError};
