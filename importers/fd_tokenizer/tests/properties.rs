//! Property-based tests for the definition-line tokenizer.
//!
//! These tests use proptest to generate lines dense in markers and
//! delimiters and verify:
//! 1. Totality: every line tokenizes, slash parsing on or off
//! 2. Accounting: no non-whitespace character is lost or duplicated
//! 3. Ordering: chunk spans are strictly increasing and non-overlapping
//! 4. Idempotence: a word re-tokenized on its own is the same single word

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use fd_tokenizer::{tokenize, tokenize_with, Chunk, ChunkType, TokenizeOptions};
use proptest::prelude::*;

// -- Line Generation Strategies --

/// Generate a line built from words, spaces, markers and delimiters.
fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::string::string_regex("[a-zäöü.]{1,6}").expect("valid regex"),
            3 => Just(" ".to_owned()),
            1 => Just("\t".to_owned()),
            1 => Just("\u{a0}".to_owned()),
            1 => prop::sample::select(vec!["(", ")", "{", "}", "[", "]", "/"])
                .prop_map(str::to_owned),
            1 => prop::sample::select(vec![",", ";", "|"]).prop_map(str::to_owned),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn non_whitespace_count(s: &str) -> usize {
    s.chars().filter(|c| !c.is_whitespace()).count()
}

/// Characters a chunk accounts for: its content plus stripped markers.
fn accounted(chunk: &Chunk) -> usize {
    let markers = if chunk.kind().is_enclosed() { 2 } else { 0 };
    non_whitespace_count(chunk.content()) + markers
}

fn options(parse_slash: bool) -> TokenizeOptions {
    TokenizeOptions::default().with_slash(parse_slash)
}

proptest! {
    #[test]
    fn arbitrary_strings_tokenize(line in any::<String>(), parse_slash in any::<bool>()) {
        let _ = tokenize_with(&line, options(parse_slash));
    }

    #[test]
    fn no_slash_chunks_without_slash_parsing(line in line_strategy()) {
        prop_assert!(tokenize(&line).iter().all(|c| c.kind() != ChunkType::Slash));
    }

    #[test]
    fn non_whitespace_characters_are_conserved(
        line in line_strategy(),
        parse_slash in any::<bool>(),
    ) {
        let chunks = tokenize_with(&line, options(parse_slash));
        let total: usize = chunks.iter().map(accounted).sum();
        prop_assert_eq!(total, non_whitespace_count(&line), "line {:?}", line);
    }

    #[test]
    fn spans_are_ordered_and_disjoint(
        line in line_strategy(),
        parse_slash in any::<bool>(),
    ) {
        let chunks = tokenize_with(&line, options(parse_slash));
        for pair in chunks.windows(2) {
            prop_assert!(
                pair[0].span().end <= pair[1].span().start,
                "overlapping spans {:?} in {:?}", pair, line
            );
        }
        for chunk in &chunks {
            prop_assert!(chunk.span().end <= line.len());
        }
    }

    #[test]
    fn words_and_delimiters_match_their_span(
        line in line_strategy(),
        parse_slash in any::<bool>(),
    ) {
        for chunk in tokenize_with(&line, options(parse_slash)) {
            if chunk.kind() == ChunkType::Word || chunk.kind().is_delimiter() {
                prop_assert_eq!(&line[chunk.span().to_range()], chunk.content());
            }
        }
    }

    #[test]
    fn words_are_trimmed_and_non_empty(
        line in line_strategy(),
        parse_slash in any::<bool>(),
    ) {
        for chunk in tokenize_with(&line, options(parse_slash)) {
            if chunk.kind() == ChunkType::Word {
                prop_assert!(!chunk.content().is_empty());
                prop_assert_eq!(chunk.content().trim(), chunk.content());
            }
        }
    }

    #[test]
    fn word_retokenizes_to_itself(line in line_strategy(), parse_slash in any::<bool>()) {
        for chunk in tokenize_with(&line, options(parse_slash)) {
            let content = chunk.content();
            // A word can only start with an opener when the opener was glued
            // to a delimiter or closer (`,(b)`); alone it is at line start.
            let glued_opener = content.starts_with(['(', '{', '[']);
            // Likewise a slash glued to a delimiter (`,/b/`), or a slash run
            // whose closer was followed by a delimiter (`/b/,`).
            let cut_slash = parse_slash && (content.starts_with('/') || content.ends_with('/'));
            if chunk.kind() == ChunkType::Word && !glued_opener && !cut_slash {
                let again = tokenize_with(content, options(parse_slash));
                prop_assert_eq!(again.len(), 1, "word {:?} from {:?}", content, line);
                prop_assert_eq!(again[0].kind(), ChunkType::Word);
                prop_assert_eq!(again[0].content(), content);
            }
        }
    }

    #[test]
    fn tokenizing_is_deterministic(line in line_strategy(), parse_slash in any::<bool>()) {
        prop_assert_eq!(
            tokenize_with(&line, options(parse_slash)),
            tokenize_with(&line, options(parse_slash))
        );
    }
}
