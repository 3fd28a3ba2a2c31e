//! Keyword extraction: turns one raw utterance into a set of normalized,
//! content-bearing keywords. Recomputed every turn, never cached.

use std::collections::BTreeSet;

use crate::matching::normalizer::{is_stopword, normalize, tokenize};

/// Raw tokens shorter than this are discarded before normalization.
const MIN_TOKEN_LEN: usize = 4;

/// Extracts normalized keywords from free text.
///
/// Tokens that are stop words or shorter than [`MIN_TOKEN_LEN`] never reach
/// the normalizer. Empty input yields an empty set.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .iter()
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !is_stopword(token))
        .map(|token| normalize(token))
        .collect()
}
