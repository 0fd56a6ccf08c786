//! Slash-span pre-pass.
//!
//! Only runs when slash parsing is enabled. A slash span is an opening `/`
//! at a word start, followed by a run of non-whitespace characters that ends
//! in a closing `/` directly before whitespace or the end of the text.
//! Brackets and punctuation inside the run are inert: `/{/` is a slash chunk
//! with content `{`.
//!
//! The line is cut at each span. Pieces between spans go through the
//! ordinary scan; if no span exists the whole line does, so stray slashes
//! (`A / B/`) stay word content.

use tracing::trace;

use crate::cursor::Cursor;
use crate::scanner::scan_ordinary;
use crate::{Chunk, ChunkType, Span, UnclosedPolicy};

/// Tokenize `text` with slash spans taking precedence, appending to `chunks`.
pub(crate) fn scan_with_slashes(text: &str, unclosed: UnclosedPolicy, chunks: &mut Vec<Chunk>) {
    let mut rest = 0;
    while let Some(span) = next_slash_span(text, rest) {
        scan_ordinary(&text[rest..span.start], rest, unclosed, chunks);
        // The run has no whitespace, so the content needs no trimming.
        let inner = &text[span.start + 1..span.end - 1];
        trace!(%span, inner, "slash span");
        chunks.push(Chunk::new(ChunkType::Slash, inner, span));
        rest = span.end;
    }
    scan_ordinary(&text[rest..], rest, unclosed, chunks);
}

/// Find the earliest valid slash span starting at or after `from`.
///
/// Returns the span from the opening through the closing `/`.
fn next_slash_span(text: &str, from: usize) -> Option<Span> {
    let piece = &text[from..];
    memchr::memchr_iter(b'/', piece.as_bytes()).find_map(|open| {
        let mut cursor = Cursor::new(piece);
        cursor.advance_to(open);
        if !cursor.at_word_start() {
            return None;
        }
        cursor.advance();
        let run_start = cursor.pos();
        cursor.eat_non_whitespace();
        cursor
            .slice_from(run_start)
            .ends_with('/')
            .then(|| Span::new(from + open, from + cursor.pos()))
    })
}
