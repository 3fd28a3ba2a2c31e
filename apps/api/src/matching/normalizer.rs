//! Text normalization primitives: tokenization, stop-word filtering, and
//! word reduction. Leaf dependency for everything text-derived.
//!
//! `normalize` runs a small lemmatization step (irregular noun plurals) and
//! then a Snowball English stem, so "cars", "coding", and "robots" compare
//! equal to the catalog's "car", "code", "robot" stems.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// Base English stop words (articles, pronouns, auxiliaries, prepositions,
/// conjunctions, and other non-content words).
const BASE_STOP_WORDS: &[&str] = &[
    // Articles
    "a", "an", "the",
    // Pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those",
    // Auxiliaries and common verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing",
    // Prepositions
    "at", "by", "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under",
    // Conjunctions and particles
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "so", "than", "too",
    "very", "just", "can", "will", "should", "could",
    // Other non-content words
    "s", "t", "now", "here", "there", "when", "where", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "then", "again", "further", "once",
];

/// Domain extension: high-frequency words in typical career-chat phrasing
/// ("hi, I want to pursue a career...") that carry no matching signal.
const DOMAIN_STOP_WORDS: &[&str] = &[
    "hi", "interest", "pursue", "career", "passion", "hello", "there", "like", "mostly",
    "make", "good", "want", "play", "playing", "grade", "family", "toward", "enjoy", "going",
    "music", "would", "student", "work",
];

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut words: HashSet<&'static str> = BASE_STOP_WORDS.iter().copied().collect();
    words.extend(DOMAIN_STOP_WORDS);
    words
});

/// Irregular noun plurals the suffix stemmer cannot reduce.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Splits text into maximal runs of ASCII alphabetic characters, lowercased.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reduces a lowercase word to its canonical comparable form.
///
/// Pure and deterministic; any input produces some token (the input itself
/// when no reduction applies).
pub fn normalize(word: &str) -> String {
    let lemma = IRREGULAR_NOUNS
        .iter()
        .find(|(plural, _)| *plural == word)
        .map(|(_, singular)| *singular)
        .unwrap_or(word);
    STEMMER.stem(lemma).into_owned()
}

/// True when the word is in the base stop-word list or the domain extension.
pub fn is_stopword(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_non_alphabetic() {
        let tokens = tokenize("I love cars, fixing things!");
        assert_eq!(tokens, vec!["i", "love", "cars", "fixing", "things"]);
    }

    #[test]
    fn test_tokenize_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 ... 456").is_empty());
    }

    #[test]
    fn test_normalize_reduces_plurals_and_gerunds() {
        assert_eq!(normalize("cars"), "car");
        assert_eq!(normalize("robots"), "robot");
        assert_eq!(normalize("coding"), "code");
        assert_eq!(normalize("fixing"), "fix");
        assert_eq!(normalize("things"), "thing");
    }

    #[test]
    fn test_normalize_handles_irregular_plurals() {
        assert_eq!(normalize("children"), "child");
        assert_eq!(normalize("mice"), "mouse");
        assert_eq!(normalize("teeth"), "tooth");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        for word in ["cars", "coding", "engineering", "animals"] {
            assert_eq!(normalize(word), normalize(word));
        }
    }

    #[test]
    fn test_normalize_is_idempotent_on_minimal_stems() {
        for stem in ["car", "code", "robot", "fix", "thing", "teach", "design"] {
            assert_eq!(normalize(stem), stem, "{stem} should already be minimal");
        }
    }

    #[test]
    fn test_base_stop_words_recognized() {
        for word in ["the", "and", "with", "your", "i"] {
            assert!(is_stopword(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_domain_stop_words_recognized() {
        for word in ["career", "passion", "hello", "student", "work"] {
            assert!(is_stopword(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_content_words_are_not_stop_words() {
        for word in ["cars", "coding", "animals", "science"] {
            assert!(!is_stopword(word), "{word} should not be a stop word");
        }
    }
}
