//! # Module: `emit`
//!
//! Turns the precomputed tables into source text for a consuming engine.
//!
//! The table data is shared; only the surrounding boilerplate differs per
//! target language. Each target implements [`TableFormatter`]:
//!
//! - [`CFormatter`]: a C header and translation unit.
//! - [`CppFormatter`]: a C++ header and source pair with C linkage.
//! - [`RustFormatter`]: a single Rust module of `const` arrays.
//!
//! C-family bodies put one origin per line, labelled with a `/*a1*/` comment.
//! Bitboards print as lowercase hex with a `UL` suffix, ray entries as
//! `{bitboard,address}` pairs and padding as `{0,0x88}`.

mod c;
mod cpp;
mod rust;

use std::fmt::Write as _;
use std::io::{self, Write};

use log::debug;

use crate::core::{RayEntry, Square};
use crate::geometry::{BitboardTable, RayTable, Table, TableId};

pub use c::CFormatter;
pub use cpp::CppFormatter;
pub use rust::RustFormatter;

/// C element type of a ray entry.
pub const RAY_ENTRY_TYPE: &str = "bboard_and_square_t";

/******************************************\
|==========================================|
|               Declarations               |
|==========================================|
\******************************************/

/// A C-family constant: its type (with array dimensions), name and initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub c_type: String,
    pub name: String,
    pub definition: String,
}

impl Declaration {
    /// Builds the declaration of one table.
    pub fn for_table(id: TableId) -> Self {
        debug!("formatting {id}");

        let (c_type, definition) = match id.table() {
            Table::Bitboards(table) => ("uint64_t[64]".to_string(), bitboard_body(table)),
            Table::RaySequences(table) => {
                (format!("{RAY_ENTRY_TYPE}[64][8]"), ray_body(table))
            }
        };

        Declaration {
            c_type,
            name: id.name().to_string(),
            definition,
        }
    }

    /// `extern const <base> <name><dims>;`
    pub fn as_decl(&self) -> String {
        match self.c_type.find('[') {
            Some(i) => format!(
                "extern const {} {}{};",
                &self.c_type[..i],
                self.name,
                &self.c_type[i..]
            ),
            None => format!("extern const {} {};", self.c_type, self.name),
        }
    }

    /// `const <base> <name><dims> = <definition>;`
    pub fn as_def(&self) -> String {
        let decl = self.as_decl();
        let signature = decl
            .trim_start_matches("extern ")
            .trim_end_matches(';');
        format!("{} = {};", signature, self.definition)
    }
}

/// Declarations for every table, in emit order.
pub fn declarations() -> Vec<Declaration> {
    TableId::iter().map(Declaration::for_table).collect()
}

/******************************************\
|==========================================|
|               Table Bodies               |
|==========================================|
\******************************************/

/// `0x302UL`
fn bitboard_literal(bits: u64) -> String {
    format!("{bits:#x}UL")
}

/// `{0x2UL,0x1}` for a real entry, `{0,0x88}` for padding.
fn ray_entry_literal(entry: &RayEntry) -> String {
    if entry.is_sentinel() {
        "{0,0x88}".to_string()
    } else {
        format!("{{{},{:#x}}}", bitboard_literal(entry.bb.0), entry.sq88)
    }
}

/// Brace-enclosed initializer of a bitboard table.
pub fn bitboard_body(table: &BitboardTable) -> String {
    let mut body = String::from("{\n");
    for sq in Square::iter() {
        // Writing to a String cannot fail.
        let _ = writeln!(body, "  /*{sq}*/ {},", bitboard_literal(table[sq.bit_index()].0));
    }
    body.push('}');
    body
}

/// Brace-enclosed initializer of a ray table.
pub fn ray_body(table: &RayTable) -> String {
    let mut body = String::from("{\n");
    for sq in Square::iter() {
        let items: Vec<String> = table[sq.bit_index()].0.iter().map(ray_entry_literal).collect();
        let _ = writeln!(body, "  /*{sq}*/ {{{}}},", items.join(","));
    }
    body.push('}');
    body
}

/******************************************\
|==========================================|
|                Formatters                |
|==========================================|
\******************************************/

/// A target language for the generated tables.
pub trait TableFormatter {
    /// Base file name of the generated files.
    fn file_stem(&self) -> &'static str;

    /// Extension of the header file, `None` when the target has no headers.
    fn header_ext(&self) -> Option<&'static str>;

    fn source_ext(&self) -> &'static str;

    /// Writes the declarations-only header.
    fn write_header(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Writes the table definitions. `stem` names the header the source includes.
    fn write_source(&self, stem: &str, out: &mut dyn Write) -> io::Result<()>;
}

/// Selects a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    C,
    Cpp,
    Rust,
}

impl Format {
    pub fn formatter(self) -> Box<dyn TableFormatter> {
        match self {
            Format::C => Box::new(CFormatter),
            Format::Cpp => Box::new(CppFormatter),
            Format::Rust => Box::new(RustFormatter),
        }
    }
}

/// True for tables followed by a blank line in grouped header listings.
fn ends_group(id: TableId) -> bool {
    matches!(
        id,
        TableId::KingMoves
            | TableId::KnightMoves
            | TableId::BlackPawnCaptures
            | TableId::BishopRaySW
            | TableId::RookRayW
    )
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
