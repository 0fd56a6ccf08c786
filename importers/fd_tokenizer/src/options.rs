//! Tokenizer configuration.

/// What to do with an opening `(`, `{` or `[` that has no closing marker
/// anywhere after it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnclosedPolicy {
    /// The opener is ordinary word content: `a (b` is one word `a (b`.
    #[default]
    FoldIntoWord,
    /// The rest of the text is the enclosed interior: `a (b` is the word `a`
    /// followed by a paren chunk `b`.
    CloseAtEnd,
}

/// Options for [`tokenize_with`](crate::tokenize_with).
///
/// The default disables slash parsing and folds unclosed openers into words.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenizeOptions {
    /// Recognize `/.../` annotations such as `/ETC/`.
    pub parse_slash: bool,
    /// Handling of openers without a closer.
    pub unclosed: UnclosedPolicy,
}

impl TokenizeOptions {
    /// Enable or disable slash parsing.
    #[must_use]
    pub fn with_slash(mut self, parse_slash: bool) -> Self {
        self.parse_slash = parse_slash;
        self
    }

    /// Set the policy for unclosed openers.
    #[must_use]
    pub fn with_unclosed(mut self, unclosed: UnclosedPolicy) -> Self {
        self.unclosed = unclosed;
        self
    }
}
