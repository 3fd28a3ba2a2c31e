//! Axum route handler for the chat turn.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::chat::conversation::{advance_turn, TurnOutcome, TurnState};
use crate::errors::AppError;
use crate::interaction_log::{dispatch, InteractionEntry};
use crate::matching::interests::SurfaceInterest;
use crate::matching::ranker::{noc_profile_url, rank, shorten_description, MatchResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Caller-held state from the previous turn's response.
    #[serde(default)]
    pub active_interest: Option<SurfaceInterest>,
}

#[derive(Debug, Serialize)]
pub struct RelatedCareer {
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Links")]
    pub link: String,
}

#[derive(Debug, Serialize)]
pub struct CareerEntry {
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "NOC")]
    pub noc: String,
    #[serde(rename = "NOC Link")]
    pub noc_link: String,
    #[serde(rename = "Matched Keywords")]
    pub matched_keywords: Vec<String>,
    #[serde(rename = "Matched Avenues")]
    pub matched_avenues: Vec<String>,
    #[serde(rename = "Related Careers")]
    pub related_careers: Vec<RelatedCareer>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub careers: Vec<CareerEntry>,
    pub active_interest: Option<SurfaceInterest>,
    /// Extracted keywords, echoed on matching turns only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter something about your interests!";
pub const MATCHES_MESSAGE: &str =
    "Here are up to three career options you might be interested in!";
pub const NO_MATCHES_MESSAGE: &str = "I'm not seeing any matches yet. Tell me more about you \
     and the things you like to do! You could mention technology, working with people, \
     creative work, or being outdoors.";

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /chat
///
/// One turn of the conversation: either a clarifying question (with the
/// interest handed back to the caller as `active_interest`) or a ranked
/// shortlist of up to three careers.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Ok(Json(ChatResponse {
            message: EMPTY_INPUT_MESSAGE.to_string(),
            careers: vec![],
            active_interest: None,
            keywords: None,
        }));
    }

    let turn_state = match request.active_interest {
        Some(interest) => TurnState::AwaitingFollowup(interest),
        None => TurnState::Idle,
    };

    let response = match advance_turn(message, turn_state) {
        TurnOutcome::Clarify {
            interest,
            message: question,
        } => {
            dispatch(state.logger.clone(), InteractionEntry::new(message, &[]));
            ChatResponse {
                message: question,
                careers: vec![],
                active_interest: Some(interest),
                keywords: None,
            }
        }
        TurnOutcome::Extracted { keywords, avenues } => {
            let results = rank(&keywords, &avenues, &state.catalog);
            let careers: Vec<CareerEntry> = results
                .iter()
                .map(|result| build_entry(result, &state.catalog))
                .collect();

            let titles: Vec<String> = careers.iter().map(|c| c.job_title.clone()).collect();
            dispatch(state.logger.clone(), InteractionEntry::new(message, &titles));

            let reply = if careers.is_empty() {
                NO_MATCHES_MESSAGE
            } else {
                MATCHES_MESSAGE
            };
            ChatResponse {
                message: reply.to_string(),
                careers,
                active_interest: None,
                keywords: Some(keywords.into_iter().collect()),
            }
        }
    };

    Ok(Json(response))
}

fn build_entry(result: &MatchResult<'_>, catalog: &Catalog) -> CareerEntry {
    let record = result.record;
    let related_careers = if record.category.is_empty() {
        vec![]
    } else {
        catalog
            .related_in_category(&record.category, &record.job_title)
            .into_iter()
            .map(|r| RelatedCareer {
                job_title: r.job_title.clone(),
                link: r.link.clone(),
            })
            .collect()
    };

    CareerEntry {
        job_title: record.job_title.clone(),
        description: shorten_description(&record.description),
        link: record.link.clone(),
        category: record.category.clone(),
        noc: record.noc.clone(),
        noc_link: noc_profile_url(&record.noc),
        matched_keywords: result.matched_keywords.clone(),
        matched_avenues: result
            .matched_avenues
            .iter()
            .map(|a| a.as_str().to_string())
            .collect(),
        related_careers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogRow;
    use crate::config::Config;
    use crate::interaction_log::NoopLogger;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let rows = vec![
            CatalogRow {
                job_title: "Automotive Technician".to_string(),
                description: "Inspects and repairs vehicles.".to_string(),
                link: "https://example.com/auto".to_string(),
                noc: "72410".to_string(),
                keywords: "engines, brakes".to_string(),
                avenues: "hands_on".to_string(),
                category: "Trades".to_string(),
            },
            CatalogRow {
                job_title: "Software Developer".to_string(),
                description: "Builds software. Writes code daily. Ships products. Maintains them.".to_string(),
                link: "https://example.com/dev".to_string(),
                noc: "21232".to_string(),
                keywords: "coding, robots".to_string(),
                avenues: "technology".to_string(),
                category: "Technology".to_string(),
            },
            CatalogRow {
                job_title: "Welder".to_string(),
                description: "Joins metal parts.".to_string(),
                link: "https://example.com/weld".to_string(),
                noc: "nan".to_string(),
                keywords: "welding, metal".to_string(),
                avenues: "hands_on".to_string(),
                category: "Trades".to_string(),
            },
        ];
        AppState {
            catalog: Arc::new(Catalog::from_rows(rows)),
            logger: Arc::new(NoopLogger),
            config: Config {
                catalog_path: "unused.csv".into(),
                interaction_log_path: "unused-log.csv".into(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn chat(state: &AppState, message: &str, active: Option<SurfaceInterest>) -> ChatResponse {
        let request = ChatRequest {
            message: message.to_string(),
            active_interest: active,
        };
        handle_chat(State(state.clone()), Json(request))
            .await
            .unwrap()
            .0
    }

    #[tokio::test]
    async fn test_scenario_cars_message_asks_clarifying_question() {
        let state = test_state();
        let response = chat(&state, "I love cars and fixing things", None).await;

        assert_eq!(response.active_interest, Some(SurfaceInterest::Cars));
        assert!(response.careers.is_empty());
        let profile = SurfaceInterest::Cars.profile();
        assert!(response.message.contains(profile.prompt));
        assert_eq!(profile.options.len(), 4);
        for option in profile.options {
            assert!(response.message.contains(option));
        }
    }

    #[tokio::test]
    async fn test_scenario_followup_answer_matches_hands_on_careers() {
        let state = test_state();
        let response = chat(
            &state,
            "working with your hands and fixing things",
            Some(SurfaceInterest::Cars),
        )
        .await;

        assert_eq!(response.active_interest, None, "follow-up is single-use");
        assert_eq!(response.message, MATCHES_MESSAGE);
        assert_eq!(response.careers.len(), 2);
        // Tied avenue scores keep catalog order
        assert_eq!(response.careers[0].job_title, "Automotive Technician");
        assert_eq!(response.careers[1].job_title, "Welder");
        assert!(response.careers[0]
            .matched_avenues
            .contains(&"hands_on".to_string()));
    }

    #[tokio::test]
    async fn test_scenario_empty_message_fast_path() {
        let state = test_state();
        let response = chat(&state, "", None).await;

        assert_eq!(response.message, EMPTY_INPUT_MESSAGE);
        assert!(response.careers.is_empty());
        assert_eq!(response.active_interest, None);
        assert!(response.keywords.is_none());
    }

    #[tokio::test]
    async fn test_scenario_unrecognizable_message_returns_fallback() {
        let state = test_state();
        let response = chat(&state, "zzz qqq", None).await;

        assert_eq!(response.message, NO_MATCHES_MESSAGE);
        assert!(response.careers.is_empty());
        assert_eq!(response.active_interest, None);
    }

    #[tokio::test]
    async fn test_scenario_keyword_matches_rank_first() {
        let state = test_state();
        let response = chat(&state, "I really enjoy coding and robots", None).await;

        assert_eq!(response.message, MATCHES_MESSAGE);
        assert_eq!(response.careers.len(), 1);
        let career = &response.careers[0];
        assert_eq!(career.job_title, "Software Developer");
        assert_eq!(career.matched_keywords, vec!["code", "robot"]);
        assert_eq!(
            career.noc_link,
            "https://noc.esdc.gc.ca/Structure/NOCProfile?code=21232&version=2021.0"
        );
        let keywords = response.keywords.expect("keywords echoed on match turns");
        assert!(keywords.contains(&"code".to_string()));
    }

    #[tokio::test]
    async fn test_nan_noc_yields_empty_profile_link() {
        let state = test_state();
        let response = chat(&state, "welding metal all day", None).await;

        let welder = response
            .careers
            .iter()
            .find(|c| c.job_title == "Welder")
            .expect("welder should match");
        assert_eq!(welder.noc_link, "");
    }

    #[tokio::test]
    async fn test_related_careers_share_category_and_exclude_self() {
        let state = test_state();
        let response = chat(&state, "fixing engines", None).await;

        let auto = &response.careers[0];
        assert_eq!(auto.job_title, "Automotive Technician");
        assert_eq!(auto.related_careers.len(), 1);
        assert_eq!(auto.related_careers[0].job_title, "Welder");
    }

    #[tokio::test]
    async fn test_description_is_shortened_in_response() {
        let state = test_state();
        let response = chat(&state, "I really enjoy coding and robots", None).await;

        assert_eq!(
            response.careers[0].description,
            "Builds software. Writes code daily. Ships products."
        );
    }

    #[tokio::test]
    async fn test_wire_format_uses_original_field_names() {
        let state = test_state();
        let response = chat(&state, "I really enjoy coding and robots", None).await;
        let json = serde_json::to_value(&response).unwrap();

        let career = &json["careers"][0];
        assert!(career.get("Job Title").is_some());
        assert!(career.get("NOC Link").is_some());
        assert!(career.get("Matched Keywords").is_some());
        assert!(career.get("Matched Avenues").is_some());
        assert_eq!(career["Matched Avenues"], serde_json::json!([]));
    }
}
