//! Handlers for the upstream character sources.
//!
//! `/universes/{universe}/characters[/{identifier}]`

use axum::extract::State;
use axum::Json;
use catalog_core::character::{ApiCharacter, CharacterOption};
use catalog_core::form::FormState;
use catalog_core::presentation::StatusBanner;
use catalog_core::universe::Universe;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CharacterListing {
    pub universe: Universe,
    pub options: Vec<CharacterOption>,
    pub status: StatusBanner,
}

#[derive(Debug, Serialize)]
pub struct LoadedCharacter {
    pub character: ApiCharacter,
    /// The picker option from the last listing of this universe, if any.
    pub selected: Option<CharacterOption>,
    pub form: FormState,
    pub status: StatusBanner,
}

fn parse_universe(raw: &str) -> AppResult<Universe> {
    raw.parse::<Universe>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// GET /api/universes/{universe}/characters
pub async fn list_characters(
    State(state): State<AppState>,
    AppPath(universe): AppPath<String>,
) -> AppResult<Json<CharacterListing>> {
    let universe = parse_universe(&universe)?;
    let options = state
        .bridge
        .list_characters(universe)
        .await
        .map_err(|source| AppError::UpstreamLoad {
            source,
            status: StatusBanner::list_failed(),
        })?;

    Ok(Json(CharacterListing {
        universe,
        status: StatusBanner::listed(options.len()),
        options,
    }))
}

/// GET /api/universes/{universe}/characters/{identifier}
///
/// Returns the normalised character together with the unlocked form,
/// preselected with the character's values.
pub async fn load_character(
    State(state): State<AppState>,
    AppPath((universe, identifier)): AppPath<(String, String)>,
) -> AppResult<Json<LoadedCharacter>> {
    let universe = parse_universe(&universe)?;
    let character = state
        .bridge
        .fetch_detail(universe, &identifier)
        .await
        .map_err(|source| AppError::UpstreamLoad {
            source,
            status: StatusBanner::detail_failed(),
        })?;
    let selected = state.bridge.resolve_option(universe, &identifier).await;
    tracing::debug!(%universe, identifier, name = %character.name, "Character loaded");

    let form = FormState::for_api_character(&state.vocabulary, universe, &character);
    Ok(Json(LoadedCharacter {
        character,
        selected,
        form,
        status: StatusBanner::detail_loaded(),
    }))
}
