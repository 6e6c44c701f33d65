//! Route definitions for the `/items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /table          -> table
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/form      -> edit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list).post(items::create))
        .route("/table", get(items::table))
        .route(
            "/{id}",
            get(items::get_by_id)
                .put(items::update)
                .delete(items::delete),
        )
        .route("/{id}/form", get(items::edit_form))
}
