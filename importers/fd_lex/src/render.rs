//! Rendering chunk streams.

use std::io::Write;

use fd_tokenizer::Chunk;
use serde::Serialize;

use crate::error::LexError;

/// Output format of `fd-lex`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable dump: a header per line, one row per chunk.
    #[default]
    Debug,
    /// One JSON object per line.
    Json,
}

/// JSON record for one tokenized line.
#[derive(Serialize)]
struct LineRecord<'a> {
    line: usize,
    chunks: &'a [Chunk],
}

/// Write the chunks of line number `line_no` (1-based) in `format`.
pub fn render_line(
    out: &mut impl Write,
    format: OutputFormat,
    line_no: usize,
    text: &str,
    chunks: &[Chunk],
) -> Result<(), LexError> {
    match format {
        OutputFormat::Debug => render_debug(out, line_no, text, chunks).map_err(LexError::Write),
        OutputFormat::Json => {
            let record = LineRecord {
                line: line_no,
                chunks,
            };
            serde_json::to_writer(&mut *out, &record).map_err(json_error)?;
            writeln!(out).map_err(LexError::Write)
        }
    }
}

/// A failed write surfaces as [`LexError::Write`] even when `serde_json` was
/// the one writing.
fn json_error(e: serde_json::Error) -> LexError {
    if e.is_io() {
        LexError::Write(e.into())
    } else {
        LexError::Json(e)
    }
}

fn render_debug(
    out: &mut impl Write,
    line_no: usize,
    text: &str,
    chunks: &[Chunk],
) -> std::io::Result<()> {
    writeln!(out, "line {line_no}: {text}")?;
    for chunk in chunks {
        writeln!(
            out,
            "  {} {} {:?}",
            chunk.kind(),
            chunk.span(),
            chunk.content()
        )?;
    }
    Ok(())
}
