use axum::routing::{get, post};
use axum::Router;

use crate::handlers::stories;
use crate::state::AppState;

/// Routes mounted at `/stories`.
///
/// ```text
/// POST /              -> generate
/// GET  /candidates    -> candidates
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(stories::generate))
        .route("/candidates", get(stories::candidates))
}
