//! View models for the catalog UI: record table rows, story pickers and
//! cards, modal notices and API status banners.

use serde::Serialize;

use crate::record::CharacterRecord;
use crate::types::RecordId;

/// Shown in table cells whose value is empty.
pub const EMPTY_CELL: &str = "-";

/// Notices containing this word auto-dismiss.
const SUCCESS_MARKER: &str = "sucesso";

/// Delay before a success notice closes itself.
pub const NOTICE_AUTO_DISMISS_MS: u64 = 3000;

/// Delay before the "character loaded" banner hides itself.
pub const BANNER_AUTO_HIDE_MS: u64 = 4000;

// ---------------------------------------------------------------------------
// Record table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: RecordId,
    pub title: String,
    /// `None` when the record has no image; the client shows a `?` tile.
    pub image_url: Option<String>,
    pub universe: String,
    pub species: String,
    pub body: String,
    pub abilities: String,
}

fn cell(value: &str) -> String {
    if value.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn table_rows(records: &[CharacterRecord]) -> Vec<TableRow> {
    records
        .iter()
        .map(|r| TableRow {
            id: r.id,
            title: r.title.clone(),
            image_url: non_blank(&r.image_url),
            universe: cell(&r.universe),
            species: cell(&r.species),
            body: cell(&r.body),
            abilities: cell(&r.abilities),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Story picker and cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryCandidate {
    pub value: RecordId,
    pub label: String,
}

/// Picker options: `"{title} ({universe})"`, with a stand-in for no universe.
pub fn story_candidates(records: &[CharacterRecord]) -> Vec<StoryCandidate> {
    records
        .iter()
        .map(|r| {
            let universe = if r.universe.is_empty() {
                "Sem universo"
            } else {
                r.universe.as_str()
            };
            StoryCandidate {
                value: r.id,
                label: format!("{} ({universe})", r.title),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryCard {
    pub image_url: Option<String>,
    pub title: String,
    pub universe: String,
    pub species: String,
}

impl From<&CharacterRecord> for StoryCard {
    fn from(record: &CharacterRecord) -> Self {
        Self {
            image_url: non_blank(&record.image_url),
            title: record.title.clone(),
            universe: if record.universe.is_empty() {
                "Universo desconhecido".to_string()
            } else {
                record.universe.clone()
            },
            species: if record.species.is_empty() {
                "Espécie desconhecida".to_string()
            } else {
                record.species.clone()
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Notices and banners
// ---------------------------------------------------------------------------

/// A blocking modal message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub message: String,
    pub auto_dismiss_ms: Option<u64>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let auto_dismiss_ms = message
            .contains(SUCCESS_MARKER)
            .then_some(NOTICE_AUTO_DISMISS_MS);
        Self {
            message,
            auto_dismiss_ms,
        }
    }

    pub fn created() -> Self {
        Self::new("Personagem criado com sucesso!")
    }

    pub fn updated() -> Self {
        Self::new("Personagem atualizado com sucesso!")
    }

    pub fn editing() -> Self {
        Self::new("Editando personagem existente. Agora você pode modificar todos os campos.")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerState {
    Success,
    Error,
}

/// Transient status line for upstream API loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBanner {
    pub state: BannerState,
    pub message: String,
    pub auto_hide_ms: Option<u64>,
}

impl StatusBanner {
    fn new(state: BannerState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
            auto_hide_ms: None,
        }
    }

    pub fn listed(count: usize) -> Self {
        Self::new(
            BannerState::Success,
            format!("Carregados {count} personagens."),
        )
    }

    pub fn list_failed() -> Self {
        Self::new(BannerState::Error, "Erro ao carregar personagens.")
    }

    pub fn detail_loaded() -> Self {
        Self {
            auto_hide_ms: Some(BANNER_AUTO_HIDE_MS),
            ..Self::new(
                BannerState::Success,
                "Personagem carregado no formulário! Agora você pode modificar as opções.",
            )
        }
    }

    pub fn detail_failed() -> Self {
        Self::new(BannerState::Error, "Erro ao carregar detalhes do personagem.")
    }
}
