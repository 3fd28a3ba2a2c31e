//! Surface interests: everyday topic words ("cars", "games") whose career
//! relevance is ambiguous until clarified. Each interest carries a static
//! profile: candidate pathway avenues, a clarifying prompt, and the answer
//! options offered to the user.

use serde::{Deserialize, Serialize};

use crate::matching::avenues::Avenue;
use crate::matching::normalizer::tokenize;

/// Closed set of ambiguous everyday topics. The wire identifier is the
/// lowercase variant name, which is also the token matched in user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceInterest {
    Cars,
    Games,
    Food,
    Nature,
    Animals,
    Sports,
}

/// Static configuration attached to one surface interest. Immutable
/// process-wide; loaded into the binary at compile time.
pub struct InterestProfile {
    /// Candidate career avenues this topic can lead to, in priority order.
    pub pathways: &'static [Avenue],
    /// Clarifying question shown when the topic is detected.
    pub prompt: &'static str,
    /// Answer options offered with the question. The follow-up lexicon
    /// recognizes fragments of these phrases.
    pub options: &'static [&'static str],
}

impl SurfaceInterest {
    pub const ALL: [SurfaceInterest; 6] = [
        SurfaceInterest::Cars,
        SurfaceInterest::Games,
        SurfaceInterest::Food,
        SurfaceInterest::Nature,
        SurfaceInterest::Animals,
        SurfaceInterest::Sports,
    ];

    /// Wire identifier, equal to the topic token matched in user text.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceInterest::Cars => "cars",
            SurfaceInterest::Games => "games",
            SurfaceInterest::Food => "food",
            SurfaceInterest::Nature => "nature",
            SurfaceInterest::Animals => "animals",
            SurfaceInterest::Sports => "sports",
        }
    }

    pub fn profile(&self) -> &'static InterestProfile {
        match self {
            SurfaceInterest::Cars => &CARS,
            SurfaceInterest::Games => &GAMES,
            SurfaceInterest::Food => &FOOD,
            SurfaceInterest::Nature => &NATURE,
            SurfaceInterest::Animals => &ANIMALS,
            SurfaceInterest::Sports => &SPORTS,
        }
    }
}

static CARS: InterestProfile = InterestProfile {
    pathways: &[Avenue::HandsOn, Avenue::Technology, Avenue::Business],
    prompt: "Cars can point toward a few very different careers. \
             Which part pulls you in most?",
    options: &[
        "Working with your hands and fixing things",
        "Designing or engineering how they work",
        "The technology and electronics inside",
        "Buying, selling, or the business side",
    ],
};

static GAMES: InterestProfile = InterestProfile {
    pathways: &[Avenue::Technology, Avenue::Creative, Avenue::People],
    prompt: "Games can be a doorway to several fields. \
             What part of gaming do you love?",
    options: &[
        "Making or programming games",
        "The art and storytelling",
        "Playing and competing with others",
        "Streaming and building a community",
    ],
};

static FOOD: InterestProfile = InterestProfile {
    pathways: &[
        Avenue::HandsOn,
        Avenue::Creative,
        Avenue::Business,
        Avenue::Health,
    ],
    prompt: "Food careers run from the kitchen to the lab. \
             What sounds most like you?",
    options: &[
        "Cooking and creating new dishes",
        "Running a restaurant or food business",
        "Nutrition and healthy eating",
        "Growing and producing food",
    ],
};

static NATURE: InterestProfile = InterestProfile {
    pathways: &[Avenue::Outdoors, Avenue::Science],
    prompt: "Nature can mean a lot of things. \
             Which of these fits you best?",
    options: &[
        "Working outdoors",
        "Studying plants and animals",
        "Protecting the environment",
        "Growing things",
    ],
};

static ANIMALS: InterestProfile = InterestProfile {
    pathways: &[Avenue::Health, Avenue::Science, Avenue::Outdoors],
    prompt: "Working with animals can take different shapes. \
             What appeals to you most?",
    options: &[
        "Caring for animals and their health",
        "Studying how animals live",
        "Working outdoors with animals",
        "Veterinary medicine",
    ],
};

static SPORTS: InterestProfile = InterestProfile {
    pathways: &[Avenue::People, Avenue::Health, Avenue::Business],
    prompt: "Sports careers go well beyond playing. \
             Which direction interests you?",
    options: &[
        "Coaching and working with people",
        "Training and fitness",
        "The business side of sports",
        "Playing and competing",
    ],
};

/// Scans text for surface-interest topic words, whole-word only, ordered by
/// first occurrence in the text and de-duplicated. Downstream consumes only
/// the first, but all are reported.
pub fn detect_surface_interests(text: &str) -> Vec<SurfaceInterest> {
    let mut found = Vec::new();
    for token in tokenize(text) {
        if let Some(interest) = SurfaceInterest::ALL
            .iter()
            .find(|i| i.as_str() == token)
            .copied()
        {
            if !found.contains(&interest) {
                found.push(interest);
            }
        }
    }
    found
}

/// Composes the clarifying question for one interest: the topic emphasized,
/// the configured prompt, and the answer options as a bulleted list.
pub fn clarifying_message(interest: SurfaceInterest) -> String {
    let profile = interest.profile();
    let options: String = profile
        .options
        .iter()
        .map(|option| format!("<li>{option}</li>"))
        .collect();
    format!(
        "It sounds like <b>{}</b> might be one of your interests! {}<ul>{}</ul>",
        interest.as_str(),
        profile.prompt,
        options
    )
}
