//! Handlers for the character form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::form::{FormState, FormSubmission, SaveAction};
use catalog_core::presentation::Notice;
use catalog_core::record::CharacterRecord;
use catalog_core::vocabulary::FormVocabulary;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub record: CharacterRecord,
    pub notice: Notice,
    /// The form after saving: cleared and locked again.
    pub form: FormState,
}

/// GET /api/form
pub async fn blank() -> Json<FormState> {
    Json(FormState::reset())
}

/// GET /api/form/vocabulary
pub async fn vocabulary(State(state): State<AppState>) -> Json<FormVocabulary> {
    Json(state.vocabulary.as_ref().clone())
}

/// POST /api/form/save
///
/// Creates a record, or updates `editingId` when present. Responds 201 on
/// create and 200 on update.
pub async fn save(
    State(state): State<AppState>,
    AppJson(submission): AppJson<FormSubmission>,
) -> AppResult<(StatusCode, Json<SaveResponse>)> {
    let action = submission.into_action()?;
    let mut store = state.store.write().await;

    let (status, record, notice) = match action {
        SaveAction::Create(input) => {
            let record = store.create(input)?;
            tracing::info!(id = record.id, "Record created from form");
            (StatusCode::CREATED, record, Notice::created())
        }
        SaveAction::Update(id, input) => {
            let record = store.update(id, input)?;
            tracing::info!(id, "Record updated from form");
            (StatusCode::OK, record, Notice::updated())
        }
    };

    Ok((
        status,
        Json(SaveResponse {
            record,
            notice,
            form: FormState::reset(),
        }),
    ))
}
