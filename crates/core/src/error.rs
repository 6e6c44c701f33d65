use crate::types::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An invalid pair of records was chosen for a story.
    #[error("Invalid selection: {0}")]
    Selection(String),
}
