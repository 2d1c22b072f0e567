use std::io::{self, Write};

use super::{TableFormatter, declarations};

const HEADER_PROLOGUE: &str = r#"
#ifndef BoardState_constants_HPP
#define BoardState_constants_HPP

#include <stdint.h>

extern "C" {

struct bboard_and_square_t {
    uint64_t bboard;
    uint8_t square;
};

"#;

const HEADER_EPILOGUE: &str = r#"
}

#endif
"#;

const SOURCE_EPILOGUE: &str = "\n}\n";

/// C++ header (`BoardState_constants.hpp`) and source (`BoardState_constants.cpp`),
/// both with C linkage.
#[derive(Debug, Default, Clone, Copy)]
pub struct CppFormatter;

impl TableFormatter for CppFormatter {
    fn file_stem(&self) -> &'static str {
        "BoardState_constants"
    }

    fn header_ext(&self) -> Option<&'static str> {
        Some("hpp")
    }

    fn source_ext(&self) -> &'static str {
        "cpp"
    }

    fn write_header(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(HEADER_PROLOGUE.as_bytes())?;
        for decl in declarations() {
            writeln!(out, "{}", decl.as_decl())?;
        }
        out.write_all(HEADER_EPILOGUE.as_bytes())
    }

    fn write_source(&self, stem: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "#include \"{stem}.hpp\"")?;
        writeln!(out, "extern \"C\" {{")?;
        for decl in declarations() {
            writeln!(out, "{}", decl.as_def())?;
        }
        out.write_all(SOURCE_EPILOGUE.as_bytes())
    }
}
