//! The two-turn clarification state machine. A message either triggers one
//! clarifying question or triggers matching, never both, and the system
//! never asks more than one follow-up per interest.

use std::collections::BTreeSet;

use crate::matching::avenues::{detect_avenues, detect_followup_avenues, Avenue};
use crate::matching::interests::{clarifying_message, detect_surface_interests, SurfaceInterest};
use crate::matching::keywords::extract_keywords;

/// Conversation state carried by the caller between turns. The core never
/// stores it, so concurrent conversations need no coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    AwaitingFollowup(SurfaceInterest),
}

/// What a turn decided to do.
#[derive(Debug)]
pub enum TurnOutcome {
    /// Ask a clarifying question. Terminal for this turn: no keywords or
    /// avenues are computed for ranking.
    Clarify {
        interest: SurfaceInterest,
        message: String,
    },
    /// Proceed to matching with the extracted signals. The next state is
    /// always `Idle`: the follow-up is single-use, and a second unclear
    /// turn is treated as a fresh utterance rather than chained.
    Extracted {
        keywords: BTreeSet<String>,
        avenues: BTreeSet<Avenue>,
    },
}

/// Runs one turn of the machine.
///
/// From `Idle`, a detected surface interest wins: the first one (by first
/// occurrence in the text) produces the clarifying question. Otherwise, and
/// always when a follow-up is pending, extraction runs. The pending branch
/// interprets the text with the follow-up lexicon; the idle branch uses the
/// first-turn avenue inferencer.
pub fn advance_turn(text: &str, state: TurnState) -> TurnOutcome {
    match state {
        TurnState::Idle => {
            let interests = detect_surface_interests(text);
            if let Some(first) = interests.first().copied() {
                return TurnOutcome::Clarify {
                    interest: first,
                    message: clarifying_message(first),
                };
            }
            TurnOutcome::Extracted {
                keywords: extract_keywords(text),
                avenues: detect_avenues(text, &interests),
            }
        }
        TurnState::AwaitingFollowup(_) => TurnOutcome::Extracted {
            keywords: extract_keywords(text),
            avenues: detect_followup_avenues(text),
        },
    }
}
