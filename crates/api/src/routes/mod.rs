pub mod form;
pub mod health;
pub mod items;
pub mod stories;
pub mod universes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                                           list, create
/// /items/table                                     record table rows
/// /items/{id}                                      get, update, delete
/// /items/{id}/form                                 form for editing a record
///
/// /universes/{universe}/characters                 upstream listing
/// /universes/{universe}/characters/{identifier}    upstream detail + form
///
/// /form                                            blank, locked form
/// /form/vocabulary                                 combined vocabulary
/// /form/save                                       validate + create/update
///
/// /stories                                         compose a story (POST)
/// /stories/candidates                              story picker options
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/universes", universes::router())
        .nest("/form", form::router())
        .nest("/stories", stories::router())
}
