//! Scores every catalog record against the extracted signals, keeps the
//! records with at least one match, and returns the ranked shortlist.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::catalog::{Catalog, CareerRecord};
use crate::matching::avenues::Avenue;

/// Size of the returned shortlist.
pub const MAX_RESULTS: usize = 3;

/// Keyword matches are higher-precision signals than avenue matches.
const KEYWORD_WEIGHT: u32 = 2;
const AVENUE_WEIGHT: u32 = 1;

/// Descriptions are cut to this many sentences.
const MAX_SENTENCES: usize = 3;

/// One catalog record enriched with what matched and how well.
pub struct MatchResult<'a> {
    pub record: &'a CareerRecord,
    pub matched_keywords: Vec<String>,
    pub matched_avenues: Vec<Avenue>,
    pub score: u32,
}

/// Ranks the catalog against one turn's keywords and avenues.
///
/// A record is kept only when at least one intersection is non-empty, so
/// empty signals always produce an empty list. Sorting is stable: equal
/// scores keep their catalog order.
pub fn rank<'a>(
    keywords: &BTreeSet<String>,
    avenues: &BTreeSet<Avenue>,
    catalog: &'a Catalog,
) -> Vec<MatchResult<'a>> {
    let mut results: Vec<MatchResult<'a>> = Vec::new();

    for record in catalog.records() {
        let matched_keywords: Vec<String> = keywords
            .intersection(&record.keyword_stems)
            .cloned()
            .collect();
        let matched_avenues: Vec<Avenue> = avenues
            .intersection(&record.avenue_tags)
            .copied()
            .collect();

        if matched_keywords.is_empty() && matched_avenues.is_empty() {
            continue;
        }

        let score = KEYWORD_WEIGHT * matched_keywords.len() as u32
            + AVENUE_WEIGHT * matched_avenues.len() as u32;

        results.push(MatchResult {
            record,
            matched_keywords,
            matched_avenues,
            score,
        });
    }

    results.sort_by_key(|r| Reverse(r.score));
    results.truncate(MAX_RESULTS);
    results
}

/// Shortens a description to its first [`MAX_SENTENCES`] sentences. Catalog
/// descriptions often open with a rhetorical question; a leading sentence
/// containing `?` is dropped first.
pub fn shorten_description(description: &str) -> String {
    let mut sentences = split_sentences(description.trim());
    if sentences.first().is_some_and(|s| s.contains('?')) {
        sentences.remove(0);
    }
    sentences.truncate(MAX_SENTENCES);
    sentences.join(" ")
}

/// Builds the external NOC profile URL, or an empty string when the code is
/// absent or the literal "nan".
pub fn noc_profile_url(noc: &str) -> String {
    let code = noc.trim();
    if code.is_empty() || code == "nan" {
        return String::new();
    }
    format!("https://noc.esdc.gc.ca/Structure/NOCProfile?code={code}&version=2021.0")
}

/// Splits text after sentence-ending punctuation followed by whitespace.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next_start, next)) = chars.peek() {
                if next.is_whitespace() {
                    let sentence = text[start..=i].trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence);
                    }
                    start = next_start;
                }
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
