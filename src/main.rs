use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use movetables::emit::{Format, TableFormatter};
use movetables::geometry::{Table, TableId};
use movetables::{RayEntry, Square};

#[derive(Parser, Debug)]
#[command(author, version, about = "Chess move-geometry table generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output language
    #[arg(long, value_enum, default_value_t = FormatArg::C)]
    format: FormatArg,

    /// Print the header instead of the source (stdout mode only)
    #[arg(long, conflicts_with = "out_dir")]
    header: bool,

    /// Write header and source files into this directory instead of stdout
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Base name of the written files (default depends on the format)
    #[arg(long, requires = "out_dir")]
    stem: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every table entry for one square
    Inspect {
        /// Square in algebraic notation, e.g. `d4`
        square: Square,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    C,
    Cpp,
    Rust,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::C => Format::C,
            FormatArg::Cpp => Format::Cpp,
            FormatArg::Rust => Format::Rust,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Command::Inspect { square }) = cli.command {
        return inspect(square);
    }

    let formatter = Format::from(cli.format).formatter();
    match &cli.out_dir {
        Some(dir) => {
            let stem = cli.stem.as_deref().unwrap_or(formatter.file_stem());
            write_files(formatter.as_ref(), dir, stem)
        }
        None => print_stdout(formatter.as_ref(), cli.header),
    }
}

fn print_stdout(formatter: &dyn TableFormatter, header: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if header {
        if formatter.header_ext().is_none() {
            bail!("--header is not available for this format");
        }
        formatter
            .write_header(&mut out)
            .context("failed to write header to stdout")?;
    } else {
        formatter
            .write_source(formatter.file_stem(), &mut out)
            .context("failed to write source to stdout")?;
    }

    out.flush()?;
    Ok(())
}

fn write_files(formatter: &dyn TableFormatter, dir: &Path, stem: &str) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    if let Some(ext) = formatter.header_ext() {
        let path = dir.join(format!("{stem}.{ext}"));
        write_file(&path, |out| formatter.write_header(out))?;
    }

    let path = dir.join(format!("{stem}.{}", formatter.source_ext()));
    write_file(&path, |out| formatter.write_source(stem, out))
}

fn write_file(path: &Path, write: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(&mut out).with_context(|| format!("failed to write {}", path.display()))?;
    out.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    info!("wrote {}", path.display());
    Ok(())
}

fn inspect(square: Square) -> Result<()> {
    let index = square.bit_index();
    println!("square {square} (bit {index}, 0x88 address {:#04x})", square.sq88());

    for id in TableId::iter() {
        match id.table() {
            Table::Bitboards(table) => {
                println!("\n{id}:");
                println!("{}", table[index]);
            }
            Table::RaySequences(table) => {
                let squares: Vec<String> = table[index]
                    .iter_real()
                    .filter_map(RayEntry::square)
                    .map(|sq| sq.to_string())
                    .collect();
                if squares.is_empty() {
                    println!("\n{id}: -");
                } else {
                    println!("\n{id}: {}", squares.join(" "));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(dir: &Path, name: &str) -> String {
        std::fs::read_to_string(dir.join(name)).unwrap()
    }

    #[test]
    fn test_write_files_c_custom_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let formatter = Format::C.formatter();
        write_files(formatter.as_ref(), tmp.path(), "attack_tables").unwrap();

        let header = read(tmp.path(), "attack_tables.h");
        assert!(header.starts_with("#ifndef MOVEGEN_CONSTANTS_H\n"));

        let source = read(tmp.path(), "attack_tables.c");
        assert_eq!(source.lines().next(), Some("#include \"attack_tables.h\""));
        assert!(!tmp.path().join("movegen_constants.h").exists());
    }

    #[test]
    fn test_write_files_cpp_custom_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let formatter = Format::Cpp.formatter();
        write_files(formatter.as_ref(), tmp.path(), "board_tables").unwrap();

        assert!(tmp.path().join("board_tables.hpp").exists());
        let source = read(tmp.path(), "board_tables.cpp");
        assert_eq!(source.lines().nth(1), Some("#include \"board_tables.hpp\""));
    }

    #[test]
    fn test_write_files_rust_source_only() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("generated");
        let formatter = Format::Rust.formatter();
        write_files(formatter.as_ref(), &out_dir, formatter.file_stem()).unwrap();

        let names: Vec<String> = std::fs::read_dir(&out_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["movegen_tables.rs".to_string()]);
    }

    #[test]
    fn test_cli_rejects_stem_without_out_dir() {
        assert!(Cli::try_parse_from(["movetables", "--stem", "tables"]).is_err());
        assert!(Cli::try_parse_from(["movetables", "--out-dir", "gen", "--stem", "tables"]).is_ok());
    }

    #[test]
    fn test_cli_rejects_header_with_out_dir() {
        assert!(Cli::try_parse_from(["movetables", "--header", "--out-dir", "gen"]).is_err());
        assert!(Cli::try_parse_from(["movetables", "--header", "--format", "cpp"]).is_ok());
    }

    #[test]
    fn test_cli_inspect_parses_square() {
        let cli = Cli::try_parse_from(["movetables", "inspect", "d4"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Inspect { square: Square::D4 })));
        assert!(Cli::try_parse_from(["movetables", "inspect", "z9"]).is_err());
    }
}
