//! Tokenizer for text-only dictionary definition lines.
//!
//! Splits one line (a headword or a translation part, e.g.
//! `foo, bar (the) [zool.]`) into a sequence of [`Chunk`]s: words,
//! single-character delimiters, and enclosed annotations.
//!
//! # Architecture
//!
//! ```text
//! &str ──► slash pre-pass ──► ordinary scan ──► Vec<Chunk>
//!          (optional)          (words, , ; |, () {} [])
//! ```
//!
//! - `slash`: with slash parsing enabled, cuts `/.../` spans out of the
//!   line before anything else is classified
//! - `scanner`: the ordinary scan over each remaining piece
//! - [`split_chunks`]: helper for cutting a result at its delimiters
//!
//! # Precedence
//!
//! Slash spans win over enclosed spans, which win over delimiters. Openers
//! only count at a word start (start of line or after whitespace), so
//! `house(s)` is a single word:
//!
//! ```
//! use fd_tokenizer::{tokenize, ChunkType};
//!
//! let chunks = tokenize("a, b (c,;d)");
//! let kinds: Vec<_> = chunks.iter().map(|c| c.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [ChunkType::Word, ChunkType::Comma, ChunkType::Word, ChunkType::Paren]
//! );
//! assert_eq!(chunks[3].content(), "c,;d");
//! ```
//!
//! Tokenizing is total: every string, including unbalanced input, produces a
//! result. It holds no state between calls.

mod chunk;
mod cursor;
mod options;
mod scanner;
mod slash;
mod span;
mod split;

pub use chunk::{Chunk, ChunkType};
pub use options::{TokenizeOptions, UnclosedPolicy};
pub use span::Span;
pub use split::{split_chunks, split_on};

use tracing::debug;

/// Tokenize a line with default options.
///
/// Slash parsing is off, so `/` is always word content, and unclosed
/// openers are folded into words.
pub fn tokenize(text: &str) -> Vec<Chunk> {
    tokenize_with(text, TokenizeOptions::default())
}

/// Tokenize a line with the given options.
pub fn tokenize_with(text: &str, options: TokenizeOptions) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    if options.parse_slash {
        slash::scan_with_slashes(text, options.unclosed, &mut chunks);
    } else {
        scanner::scan_ordinary(text, 0, options.unclosed, &mut chunks);
    }
    debug!(
        len = text.len(),
        chunks = chunks.len(),
        parse_slash = options.parse_slash,
        "tokenized line"
    );
    chunks
}
