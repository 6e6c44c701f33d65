//! Handlers for the story composer.

use std::time::Duration;

use axum::extract::State;
use axum::Json;
use catalog_core::presentation::{self, StoryCandidate, StoryCard};
use catalog_core::story::{self, Story};
use catalog_core::types::RecordId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub first: Option<RecordId>,
    pub second: Option<RecordId>,
}

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub story: Story,
    pub characters: [StoryCard; 2],
}

/// GET /api/stories/candidates
pub async fn candidates(State(state): State<AppState>) -> Json<Vec<StoryCandidate>> {
    let store = state.store.read().await;
    Json(presentation::story_candidates(store.list()))
}

/// POST /api/stories
///
/// Validates the pair, looks both records up, waits the configured
/// cosmetic delay, then composes the story.
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<StoryRequest>,
) -> AppResult<Json<StoryResponse>> {
    let (first_id, second_id) = story::validate_selection(input.first, input.second)?;

    let (first, second) = {
        let store = state.store.read().await;
        (store.get(first_id)?.clone(), store.get(second_id)?.clone())
    };

    if state.config.story_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.story_delay_ms)).await;
    }

    let story = story::generate(&mut rand::rng(), Some(&first), Some(&second))?;
    tracing::debug!(first_id, second_id, template = story.template_index, "Story composed");

    Ok(Json(StoryResponse {
        story,
        characters: [StoryCard::from(&first), StoryCard::from(&second)],
    }))
}
