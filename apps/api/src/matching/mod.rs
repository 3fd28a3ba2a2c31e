//! The interest-extraction and matching engine: text normalization, surface
//! interest detection, avenue inference, and scoring/ranking.

pub mod avenues;
pub mod interests;
pub mod keywords;
pub mod normalizer;
pub mod ranker;
