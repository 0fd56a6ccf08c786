//! Reading lines and dumping their chunks.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use fd_tokenizer::tokenize_with;
use tracing::{debug, trace};

use crate::args::LexConfig;
use crate::error::LexError;
use crate::render::render_line;

/// Counters of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Non-blank lines tokenized.
    pub lines: usize,
    /// Chunks emitted over all lines.
    pub chunks: usize,
}

/// Dump the input named by `config` to `out`.
pub fn run(config: &LexConfig, out: &mut impl Write) -> Result<LexSummary, LexError> {
    match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| LexError::Read {
                path: path.clone(),
                source,
            })?;
            lex_lines(BufReader::new(file), path, config, out)
        }
        None => lex_lines(io::stdin().lock(), "<stdin>", config, out),
    }
}

/// Tokenize every non-blank line of `reader` and render it to `out`.
///
/// `name` identifies the input in error messages. Line numbers count blank
/// lines too, so they match the input.
pub fn lex_lines(
    reader: impl BufRead,
    name: &str,
    config: &LexConfig,
    out: &mut impl Write,
) -> Result<LexSummary, LexError> {
    let mut summary = LexSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LexError::Read {
            path: name.to_owned(),
            source,
        })?;
        if line.trim().is_empty() {
            trace!(line = index + 1, "skipping blank line");
            continue;
        }

        let chunks = tokenize_with(&line, config.options);
        render_line(out, config.format, index + 1, &line, &chunks)?;
        summary.lines += 1;
        summary.chunks += chunks.len();
    }

    out.flush().map_err(LexError::Write)?;
    debug!(
        input = name,
        lines = summary.lines,
        chunks = summary.chunks,
        "finished dumping chunks"
    );
    Ok(summary)
}
