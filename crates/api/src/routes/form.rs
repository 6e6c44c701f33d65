use axum::routing::{get, post};
use axum::Router;

use crate::handlers::form;
use crate::state::AppState;

/// Routes mounted at `/form`.
///
/// ```text
/// GET  /              -> blank
/// GET  /vocabulary    -> vocabulary
/// POST /save          -> save
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(form::blank))
        .route("/vocabulary", get(form::vocabulary))
        .route("/save", post(form::save))
}
