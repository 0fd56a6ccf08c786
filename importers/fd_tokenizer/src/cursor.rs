//! Byte cursor over a definition line.
//!
//! Every marker the tokenizer reacts to (`( ) { } [ ] / , ; |`) is ASCII.
//! ASCII bytes never occur inside a multi-byte UTF-8 sequence, so the cursor
//! advances byte-by-byte and any position it stops at because of a marker is
//! a valid character boundary. Whitespace checks decode the neighbouring
//! character, so Unicode whitespace (e.g. U+00A0) counts like a space.

/// Cursor over the bytes of one line (or one piece of a line).
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    /// Current read position (byte index into `text`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Returns the byte at the current position, or `None` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Move the cursor to `pos`.
    ///
    /// # Contract
    ///
    /// `pos` must not move backwards and must not exceed the text length.
    #[inline]
    pub(crate) fn advance_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor moved backwards: {pos} < {}", self.pos);
        debug_assert!(pos <= self.text.len(), "cursor past end: {pos}");
        self.pos = pos;
    }

    /// Current byte offset in the text.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the text in bytes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    /// Extract a substring of the text.
    ///
    /// # Contract
    ///
    /// `start..end` must lie on character boundaries. This holds for
    /// positions the scanner stops at (ASCII markers, EOF, or whitespace
    /// found by [`eat_non_whitespace`](Self::eat_non_whitespace)).
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start..end]
    }

    /// Extract the text from `start` to the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Boundary predicate for openers.
    ///
    /// An opening marker at the current position may only start an enclosed
    /// span when it is the first character of the text or directly follows
    /// whitespace. Markers glued to a word (`house(s)`) stay word content.
    pub(crate) fn at_word_start(&self) -> bool {
        self.text[..self.pos]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace)
    }

    /// Position of the next occurrence of `byte` after the current one.
    ///
    /// The byte under the cursor is skipped; it is the opener being matched.
    /// Uses `memchr` for the forward search.
    pub(crate) fn find_after(&self, byte: u8) -> Option<usize> {
        let from = self.pos + 1;
        let rest = self.text.as_bytes().get(from..)?;
        memchr::memchr(byte, rest).map(|offset| from + offset)
    }

    /// Advance while the current character is not whitespace.
    ///
    /// Stops at the first whitespace character or at EOF.
    pub(crate) fn eat_non_whitespace(&mut self) {
        let rest = &self.text[self.pos..];
        let run = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += run;
    }
}
