//! Ordinary scan: words, punctuation delimiters and enclosed annotations.
//!
//! # Precedence
//!
//! An enclosing opener at a word start wins over everything inside its span:
//! `(a, b)` is one paren chunk, the comma is inert. Matching is non-nesting,
//! the first matching closer ends the span, so `(a(b)c)` is `Paren "a(b"`
//! followed by `Word "c)"`.
//!
//! Slash annotations are not handled here. With slash parsing enabled the
//! [`slash`](crate::slash) pre-pass cuts them out first and feeds the pieces
//! in between to this scanner.

use tracing::trace;

use crate::cursor::Cursor;
use crate::{Chunk, ChunkType, Span, UnclosedPolicy};

/// Tokenize `text` without slash handling, appending to `chunks`.
///
/// `base` is the byte offset of `text` within the full line; it is added to
/// every emitted span.
pub(crate) fn scan_ordinary(
    text: &str,
    base: usize,
    unclosed: UnclosedPolicy,
    chunks: &mut Vec<Chunk>,
) {
    Scanner {
        cursor: Cursor::new(text),
        base,
        unclosed,
        word_start: 0,
        missing_closer: [false; 3],
        chunks,
    }
    .run();
}

/// The three enclosing delimiter pairs.
#[derive(Copy, Clone, Debug)]
enum Enclosure {
    Paren,
    Brace,
    Bracket,
}

impl Enclosure {
    fn kind(self) -> ChunkType {
        match self {
            Enclosure::Paren => ChunkType::Paren,
            Enclosure::Brace => ChunkType::Brace,
            Enclosure::Bracket => ChunkType::Bracket,
        }
    }

    fn closer(self) -> u8 {
        match self {
            Enclosure::Paren => b')',
            Enclosure::Brace => b'}',
            Enclosure::Bracket => b']',
        }
    }
}

/// State of one ordinary scan. Lives for a single call only.
struct Scanner<'a, 'c> {
    cursor: Cursor<'a>,
    base: usize,
    unclosed: UnclosedPolicy,
    /// Start of the pending word: everything from here to the cursor that
    /// has not been emitted yet.
    word_start: usize,
    /// Per [`Enclosure`]: its closer does not occur after the cursor. Set
    /// once a search fails, so later openers of that kind skip the search.
    missing_closer: [bool; 3],
    chunks: &'c mut Vec<Chunk>,
}

impl Scanner<'_, '_> {
    fn run(mut self) {
        while let Some(byte) = self.cursor.current() {
            match byte {
                b'(' if self.cursor.at_word_start() => self.enclosed(Enclosure::Paren),
                b'{' if self.cursor.at_word_start() => self.enclosed(Enclosure::Brace),
                b'[' if self.cursor.at_word_start() => self.enclosed(Enclosure::Bracket),
                b',' => self.delimiter(ChunkType::Comma),
                b';' => self.delimiter(ChunkType::Semicolon),
                b'|' => self.delimiter(ChunkType::VerticalBar),
                _ => self.cursor.advance(),
            }
        }
        self.flush_word(self.cursor.len());
    }

    /// Handle an opener at a word start.
    fn enclosed(&mut self, enclosure: Enclosure) {
        let kind = enclosure.kind();
        let open = self.cursor.pos();
        let close = if self.missing_closer[enclosure as usize] {
            None
        } else {
            self.cursor.find_after(enclosure.closer())
        };
        let (inner_end, end) = match close {
            Some(close) => (close, close + 1),
            None => match self.unclosed {
                UnclosedPolicy::FoldIntoWord => {
                    self.missing_closer[enclosure as usize] = true;
                    trace!(offset = self.base + open, %kind, "unclosed opener folded into word");
                    self.cursor.advance();
                    return;
                }
                UnclosedPolicy::CloseAtEnd => {
                    trace!(offset = self.base + open, %kind, "unclosed opener closed at end");
                    (self.cursor.len(), self.cursor.len())
                }
            },
        };

        self.flush_word(open);
        let inner = self.cursor.slice(open + 1, inner_end);
        self.push(kind, inner.trim(), open, end);
        self.cursor.advance_to(end);
        self.word_start = end;
    }

    fn delimiter(&mut self, kind: ChunkType) {
        let pos = self.cursor.pos();
        self.flush_word(pos);
        self.push(kind, self.cursor.slice(pos, pos + 1), pos, pos + 1);
        self.cursor.advance();
        self.word_start = pos + 1;
    }

    /// Emit the pending word ending at `end`, if it is not blank.
    fn flush_word(&mut self, end: usize) {
        let raw = self.cursor.slice(self.word_start, end);
        let word = raw.trim();
        if word.is_empty() {
            return;
        }
        let start = self.word_start + (raw.len() - raw.trim_start().len());
        self.push(ChunkType::Word, word, start, start + word.len());
    }

    fn push(&mut self, kind: ChunkType, content: &str, start: usize, end: usize) {
        let span = Span::new(self.base + start, self.base + end);
        self.chunks.push(Chunk::new(kind, content, span));
    }
}
