//! Handlers for the `/items` resource (the record store).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::form::FormState;
use catalog_core::presentation::{self, Notice, TableRow};
use catalog_core::record::{CharacterRecord, CreateRecord, UpdateRecord};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{AppJson, RecordPath};
use crate::state::AppState;

/// A stored record loaded into the form for editing.
#[derive(Debug, Serialize)]
pub struct EditForm {
    pub form: FormState,
    pub notice: Notice,
}

/// GET /api/items
pub async fn list(State(state): State<AppState>) -> Json<Vec<CharacterRecord>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

/// GET /api/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordPath(id): RecordPath,
) -> AppResult<Json<CharacterRecord>> {
    let store = state.store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

/// POST /api/items
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRecord>,
) -> AppResult<(StatusCode, Json<CharacterRecord>)> {
    let record = state.store.write().await.create(input)?;
    tracing::info!(id = record.id, title = %record.title, "Record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/items/{id}
///
/// Absent or null fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    RecordPath(id): RecordPath,
    AppJson(input): AppJson<UpdateRecord>,
) -> AppResult<Json<CharacterRecord>> {
    let record = state.store.write().await.update(id, input)?;
    tracing::info!(id, "Record updated");
    Ok(Json(record))
}

/// DELETE /api/items/{id}
///
/// Responds with the removed record.
pub async fn delete(
    State(state): State<AppState>,
    RecordPath(id): RecordPath,
) -> AppResult<Json<CharacterRecord>> {
    let record = state.store.write().await.delete(id)?;
    tracing::info!(id, "Record deleted");
    Ok(Json(record))
}

/// GET /api/items/table
pub async fn table(State(state): State<AppState>) -> Json<Vec<TableRow>> {
    let store = state.store.read().await;
    Json(presentation::table_rows(store.list()))
}

/// GET /api/items/{id}/form
///
/// The unlocked form for editing a stored record.
pub async fn edit_form(
    State(state): State<AppState>,
    RecordPath(id): RecordPath,
) -> AppResult<Json<EditForm>> {
    let store = state.store.read().await;
    let record = store.get(id)?;
    Ok(Json(EditForm {
        form: FormState::for_record(&state.vocabulary, record),
        notice: Notice::editing(),
    }))
}
