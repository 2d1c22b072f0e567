//! # Module: `geometry`
//!
//! Position-independent piece geometry for an 8x8 board.
//!
//! ## Submodules
//!
//! - `rules`: one movement rule per piece archetype.
//! - `dest_list`: the fixed-capacity buffer rules accumulate into.
//! - `builder`: the bitboard-table and ray-table builders.
//! - `tables`: the fourteen named tables, computed at compile time.

mod builder;
mod dest_list;
mod rules;
mod tables;

pub use builder::{
    BitboardTable, RAY_LEN, RaySequence, RayTable, build_bitboard_table, build_ray_table,
};
pub use dest_list::{DestList, MAX_DESTINATIONS};
pub use rules::{Archetype, Rule};
pub use tables::*;
