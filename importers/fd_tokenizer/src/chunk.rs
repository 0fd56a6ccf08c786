//! Chunk kinds and the chunks emitted by the tokenizer.
//!
//! A definition line is split into three families of chunks:
//!
//! - **Words**: trimmed runs of text between recognized delimiters.
//! - **Delimiters**: `,` `;` `|`, separating words or definitions.
//! - **Enclosed annotations**: `(...)`, `{...}`, `[...]` and, when enabled,
//!   `/.../`. Their content is the text between the markers.

use std::fmt;

use crate::Span;

/// Kind of a tokenized chunk.
///
/// This is a closed set: the tokenizer never produces anything else.
/// `Slash` only appears when slash parsing is enabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChunkType {
    /// Plain text between delimiters.
    Word,
    /// `,` — word/definition boundary.
    Comma,
    /// `;` — separates e.g. homonyms.
    Semicolon,
    /// `|` — delimiter like comma.
    VerticalBar,
    /// Parenthesized expression `(...)`.
    Paren,
    /// Embraced expression `{...}`, typically grammatical info.
    Brace,
    /// Bracketed expression `[...]`, typically usage labels like `[zool.]`.
    Bracket,
    /// Slash-enclosed expression `/.../`, e.g. abbreviations such as `/ETC/`.
    Slash,
}

impl ChunkType {
    /// Returns `true` for the single-character delimiters `,` `;` `|`.
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            ChunkType::Comma | ChunkType::Semicolon | ChunkType::VerticalBar
        )
    }

    /// Returns `true` for kinds whose content was read between two markers.
    pub const fn is_enclosed(self) -> bool {
        matches!(
            self,
            ChunkType::Paren | ChunkType::Brace | ChunkType::Bracket | ChunkType::Slash
        )
    }

    /// The delimiter character for delimiter kinds, `None` otherwise.
    pub const fn delimiter_char(self) -> Option<char> {
        match self {
            ChunkType::Comma => Some(','),
            ChunkType::Semicolon => Some(';'),
            ChunkType::VerticalBar => Some('|'),
            _ => None,
        }
    }

    /// Human-readable name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            ChunkType::Word => "Word",
            ChunkType::Comma => "Comma",
            ChunkType::Semicolon => "Semicolon",
            ChunkType::VerticalBar => "VerticalBar",
            ChunkType::Paren => "Paren",
            ChunkType::Brace => "Brace",
            ChunkType::Bracket => "Bracket",
            ChunkType::Slash => "Slash",
        }
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified unit of a tokenized line.
///
/// Chunks are immutable once produced. The content is owned so that a
/// token sequence carries no borrow of the line it was read from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    kind: ChunkType,
    content: String,
    span: Span,
}

impl Chunk {
    pub(crate) fn new(kind: ChunkType, content: &str, span: Span) -> Self {
        Chunk {
            kind,
            content: content.to_owned(),
            span,
        }
    }

    /// The kind of this chunk.
    #[inline]
    pub fn kind(&self) -> ChunkType {
        self.kind
    }

    /// Trimmed text of the chunk.
    ///
    /// For words this is the word itself, for delimiters the delimiter
    /// character, for enclosed kinds the text between the markers.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Where the chunk was read from in the source line.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if this chunk has the given kind.
    #[inline]
    pub fn is(&self, kind: ChunkType) -> bool {
        self.kind == kind
    }

    /// Consume the chunk, returning its kind and content.
    pub fn into_parts(self) -> (ChunkType, String) {
        (self.kind, self.content)
    }
}
