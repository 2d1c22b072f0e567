use std::io::{self, Write};

use log::debug;

use super::TableFormatter;
use crate::core::RayEntry;
use crate::geometry::{BitboardTable, RaySequence, RayTable, Table, TableId};

const PRELUDE: &str = "\
use movetables::core::{Bitboard, RayEntry};
use movetables::geometry::RaySequence;
";

/// A single Rust module (`movegen_tables.rs`) of `pub const` arrays, suitable
/// for `include!` from a build script's output directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustFormatter;

/// Formats a bitboard table into a Rust `const` array string.
pub fn format_bitboard_array(name: &str, data: &BitboardTable) -> String {
    let items = data
        .iter()
        .map(|bb| format!("Bitboard({:#X})", bb.0))
        .collect::<Vec<_>>()
        .join(",\n    ");
    format!(
        "pub const {}: [Bitboard; {}] = [\n    {}\n];\n",
        name,
        data.len(),
        items
    )
}

fn format_ray_entry(entry: &RayEntry) -> String {
    if entry.is_sentinel() {
        "RayEntry::SENTINEL".to_string()
    } else {
        format!(
            "RayEntry {{ bb: Bitboard({:#X}), sq88: {:#04x} }}",
            entry.bb.0, entry.sq88
        )
    }
}

fn format_ray_sequence(seq: &RaySequence) -> String {
    let entries = seq
        .0
        .iter()
        .map(format_ray_entry)
        .collect::<Vec<_>>()
        .join(", ");
    format!("RaySequence([{}])", entries)
}

/// Formats a ray table into a Rust `const` array string, one origin per line.
pub fn format_ray_array(name: &str, data: &RayTable) -> String {
    let items = data
        .iter()
        .map(format_ray_sequence)
        .collect::<Vec<_>>()
        .join(",\n    ");
    format!(
        "pub const {}: [RaySequence; {}] = [\n    {}\n];\n",
        name,
        data.len(),
        items
    )
}

impl TableFormatter for RustFormatter {
    fn file_stem(&self) -> &'static str {
        "movegen_tables"
    }

    fn header_ext(&self) -> Option<&'static str> {
        None
    }

    fn source_ext(&self) -> &'static str {
        "rs"
    }

    fn write_header(&self, _out: &mut dyn Write) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "Rust output has no header file",
        ))
    }

    fn write_source(&self, _stem: &str, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(PRELUDE.as_bytes())?;
        for id in TableId::iter() {
            debug!("formatting {id}");
            let text = match id.table() {
                Table::Bitboards(table) => format_bitboard_array(id.name(), table),
                Table::RaySequences(table) => format_ray_array(id.name(), table),
            };
            writeln!(out)?;
            out.write_all(text.as_bytes())?;
        }
        Ok(())
    }
}
