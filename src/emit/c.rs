use std::io::{self, Write};

use super::{Declaration, TableFormatter, declarations, ends_group};
use crate::geometry::TableId;

const HEADER_PROLOGUE: &str = r#"#ifndef MOVEGEN_CONSTANTS_H
#define MOVEGEN_CONSTANTS_H

#include <stdint.h>

#ifdef __cplusplus
extern "C" {
#endif

typedef struct _bboard_and_square {
    uint64_t bboard;
    uint8_t square;
} bboard_and_square_t;

"#;

const HEADER_EPILOGUE: &str = r#"#ifdef __cplusplus
}
#endif

#endif
"#;

const LINKAGE_OPEN: &str = r#"
#ifdef __cplusplus
extern "C" {
#endif
"#;

const LINKAGE_CLOSE: &str = r#"
#ifdef __cplusplus
}
#endif
"#;

/// C header (`movegen_constants.h`) and translation unit (`movegen_constants.c`).
#[derive(Debug, Default, Clone, Copy)]
pub struct CFormatter;

impl TableFormatter for CFormatter {
    fn file_stem(&self) -> &'static str {
        "movegen_constants"
    }

    fn header_ext(&self) -> Option<&'static str> {
        Some("h")
    }

    fn source_ext(&self) -> &'static str {
        "c"
    }

    fn write_header(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(HEADER_PROLOGUE.as_bytes())?;
        for id in TableId::iter() {
            writeln!(out, "{}", Declaration::for_table(id).as_decl())?;
            if ends_group(id) {
                writeln!(out)?;
            }
        }
        out.write_all(HEADER_EPILOGUE.as_bytes())?;
        writeln!(out)
    }

    fn write_source(&self, stem: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "#include \"{stem}.h\"")?;
        writeln!(out, "{LINKAGE_OPEN}")?;
        for decl in declarations() {
            writeln!(out, "{}", decl.as_def())?;
        }
        writeln!(out, "{LINKAGE_CLOSE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl Fn(&CFormatter, &mut dyn Write) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&CFormatter, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_layout() {
        let header = render(|c, out| c.write_header(out));

        assert!(header.starts_with("#ifndef MOVEGEN_CONSTANTS_H\n"));
        assert!(header.contains("typedef struct _bboard_and_square {"));
        assert!(header.contains(
            "extern const uint64_t KING_CAPTURES[64];\n\
             extern const bboard_and_square_t KING_MOVES[64][8];\n\n\
             extern const uint64_t KNIGHT_CAPTURES[64];"
        ));
        assert!(header.contains(
            "extern const bboard_and_square_t ROOK_RAY_W[64][8];\n\n#ifdef __cplusplus\n}"
        ));
        assert!(header.ends_with("#endif\n\n"));
        assert_eq!(header.matches("extern const").count(), 14);
    }

    #[test]
    fn test_source_layout() {
        let source = render(|c, out| c.write_source(c.file_stem(), out));

        assert!(source.starts_with(
            "#include \"movegen_constants.h\"\n\n#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n"
        ));
        assert!(source.contains("const uint64_t KING_CAPTURES[64] = {\n  /*a1*/ 0x302UL,\n"));
        assert!(source.contains("const bboard_and_square_t ROOK_RAY_W[64][8] = {\n"));
        assert!(source.ends_with("\n#ifdef __cplusplus\n}\n#endif\n\n"));
        assert!(!source.contains("extern const"));
    }

    #[test]
    fn test_source_includes_given_stem() {
        let source = render(|c, out| c.write_source("attack_tables", out));
        assert!(source.starts_with("#include \"attack_tables.h\"\n"));
        assert!(!source.contains("movegen_constants"));
    }
}
