//! Career avenues: the coarse direction vocabulary shared by user text,
//! follow-up answers, and catalog records.
//!
//! Avenues are a more robust signal than raw keywords. A short or colloquial
//! utterance ("I like fixing cars") still surfaces relevant careers through
//! the pathway table even when no catalog keyword matches directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::matching::interests::SurfaceInterest;
use crate::matching::normalizer::tokenize;

/// Closed set of career-direction identifiers. Ordering is declaration
/// order, which fixes the iteration order of avenue sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Avenue {
    HandsOn,
    Technology,
    People,
    Creative,
    Business,
    Science,
    Outdoors,
    Health,
}

impl Avenue {
    /// Canonical identifier, as used in catalog tags and the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Avenue::HandsOn => "hands_on",
            Avenue::Technology => "technology",
            Avenue::People => "people",
            Avenue::Creative => "creative",
            Avenue::Business => "business",
            Avenue::Science => "science",
            Avenue::Outdoors => "outdoors",
            Avenue::Health => "health",
        }
    }

    /// Parses a canonical identifier. Catalog tags are expected to already
    /// be canonical, so no normalization is applied.
    pub fn from_tag(tag: &str) -> Option<Avenue> {
        match tag {
            "hands_on" => Some(Avenue::HandsOn),
            "technology" => Some(Avenue::Technology),
            "people" => Some(Avenue::People),
            "creative" => Some(Avenue::Creative),
            "business" => Some(Avenue::Business),
            "science" => Some(Avenue::Science),
            "outdoors" => Some(Avenue::Outdoors),
            "health" => Some(Avenue::Health),
            _ => None,
        }
    }
}

/// Literal fragments of the clarifying-answer options, mapped to avenues.
/// Substring-matched against the lowercased follow-up answer, which is
/// expected to closely echo one of the offered options.
const FOLLOW_UP_LEXICON: &[(&str, &[Avenue])] = &[
    ("working with your hands", &[Avenue::HandsOn]),
    ("fixing things", &[Avenue::HandsOn]),
    ("designing or engineering", &[Avenue::Technology, Avenue::Creative]),
    ("technology and electronics", &[Avenue::Technology]),
    ("buying", &[Avenue::Business]),
    ("selling", &[Avenue::Business]),
    ("business side", &[Avenue::Business]),
    ("making or programming", &[Avenue::Technology]),
    ("art and storytelling", &[Avenue::Creative]),
    ("playing and competing", &[Avenue::People]),
    ("community", &[Avenue::People, Avenue::Business]),
    ("cooking", &[Avenue::HandsOn, Avenue::Creative]),
    ("restaurant", &[Avenue::Business]),
    ("nutrition", &[Avenue::Health]),
    ("growing", &[Avenue::Outdoors]),
    ("working outdoors", &[Avenue::Outdoors]),
    ("plants and animals", &[Avenue::Science, Avenue::Outdoors]),
    ("environment", &[Avenue::Science, Avenue::Outdoors]),
    ("caring for animals", &[Avenue::Health, Avenue::Outdoors]),
    ("veterinary", &[Avenue::Health, Avenue::Science]),
    ("coaching", &[Avenue::People]),
    ("training and fitness", &[Avenue::Health]),
];

/// Free-text phrases mapped to a single avenue. Applied unconditionally to
/// any utterance as a coarse signal.
const PHRASE_AVENUE_LEXICON: &[(&str, Avenue)] = &[
    ("fixing", Avenue::HandsOn),
    ("repair", Avenue::HandsOn),
    ("with my hands", Avenue::HandsOn),
    ("tools", Avenue::HandsOn),
    ("woodwork", Avenue::HandsOn),
    ("computer", Avenue::Technology),
    ("software", Avenue::Technology),
    ("electronics", Avenue::Technology),
    ("machines", Avenue::Technology),
    ("helping people", Avenue::People),
    ("teaching", Avenue::People),
    ("talking to people", Avenue::People),
    ("volunteer", Avenue::People),
    ("drawing", Avenue::Creative),
    ("painting", Avenue::Creative),
    ("design", Avenue::Creative),
    ("writing", Avenue::Creative),
    ("money", Avenue::Business),
    ("entrepreneur", Avenue::Business),
    ("managing", Avenue::Business),
    ("experiment", Avenue::Science),
    ("chemistry", Avenue::Science),
    ("biology", Avenue::Science),
    ("research", Avenue::Science),
    ("outside", Avenue::Outdoors),
    ("outdoor", Avenue::Outdoors),
    ("hiking", Avenue::Outdoors),
    ("camping", Avenue::Outdoors),
    ("medicine", Avenue::Health),
    ("doctor", Avenue::Health),
    ("nursing", Avenue::Health),
    ("fitness", Avenue::Health),
];

fn phrase_lexicon_hits(lowered: &str, avenues: &mut BTreeSet<Avenue>) {
    for (phrase, avenue) in PHRASE_AVENUE_LEXICON {
        if lowered.contains(phrase) {
            avenues.insert(*avenue);
        }
    }
}

/// Interprets a follow-up answer. Used only when a clarifying question is
/// pending. Both lexicons are substring-matched, so overlapping phrases may
/// all fire.
pub fn detect_followup_avenues(text: &str) -> BTreeSet<Avenue> {
    let lowered = text.trim().to_lowercase();
    let mut avenues = BTreeSet::new();
    for (fragment, mapped) in FOLLOW_UP_LEXICON {
        if lowered.contains(fragment) {
            avenues.extend(mapped.iter().copied());
        }
    }
    phrase_lexicon_hits(&lowered, &mut avenues);
    avenues
}

/// Infers avenues from a first-turn utterance. Unions three additive signal
/// sources: literal avenue-identifier tokens, the pathway avenues of every
/// detected surface interest, and phrase-lexicon hits.
pub fn detect_avenues(text: &str, interests: &[SurfaceInterest]) -> BTreeSet<Avenue> {
    let mut avenues = BTreeSet::new();
    for token in tokenize(text) {
        if let Some(avenue) = Avenue::from_tag(&token) {
            avenues.insert(avenue);
        }
    }
    for interest in interests {
        avenues.extend(interest.profile().pathways.iter().copied());
    }
    phrase_lexicon_hits(&text.to_lowercase(), &mut avenues);
    avenues
}
