//! Route definitions for the upstream character sources.

use axum::routing::get;
use axum::Router;

use crate::handlers::universes;
use crate::state::AppState;

/// Routes mounted at `/universes`.
///
/// ```text
/// GET /{universe}/characters                -> list_characters
/// GET /{universe}/characters/{identifier}   -> load_character
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{universe}/characters", get(universes::list_characters))
        .route(
            "/{universe}/characters/{identifier}",
            get(universes::load_character),
        )
}
