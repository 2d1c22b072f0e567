//! # movetables
//!
//! Precomputed, position-independent move geometry for an 8x8 chess board.
//!
//! Every table is a compile-time constant indexed by origin bit index
//! (`a1 = 0`, `h8 = 63`). The [`emit`] module renders them as C, C++ or Rust
//! source for engines that want them baked in.
pub mod core;
pub mod emit;
pub mod geometry;

pub use crate::core::*;
pub use crate::geometry::{RaySequence, TableId};
