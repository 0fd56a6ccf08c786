//! Splitting a chunk sequence into groups.
//!
//! Importers usually cut a tokenized definition line at its delimiters:
//! commas separate translations, semicolons separate homonyms.

use crate::{Chunk, ChunkType};

/// Split `chunks` at every chunk for which `is_split_point` returns `true`.
///
/// Split points are dropped. An empty input yields no groups; otherwise
/// there is one more group than split points, and groups between adjacent
/// split points are empty.
pub fn split_chunks<F>(chunks: &[Chunk], is_split_point: F) -> Vec<&[Chunk]>
where
    F: FnMut(&Chunk) -> bool,
{
    if chunks.is_empty() {
        return Vec::new();
    }
    chunks.split(is_split_point).collect()
}

/// Split `chunks` at every chunk of kind `delimiter`.
pub fn split_on(chunks: &[Chunk], delimiter: ChunkType) -> Vec<&[Chunk]> {
    split_chunks(chunks, |chunk| chunk.is(delimiter))
}
