//! Character record model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// A saved character in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub id: RecordId,
    pub title: String,
    pub body: String,
    pub universe: String,
    pub species: String,
    pub image_url: String,
    pub abilities: String,
}

/// DTO for creating a record. `title` is required; every other field
/// defaults to an empty string when absent, null or empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecord {
    pub title: Option<String>,
    pub body: Option<String>,
    pub universe: Option<String>,
    pub species: Option<String>,
    pub image_url: Option<String>,
    pub abilities: Option<String>,
}

impl CreateRecord {
    /// Shorthand for a create request carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// DTO for updating a record. Absent or null fields keep their current
/// value; an explicit empty string overwrites.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    pub title: Option<String>,
    pub body: Option<String>,
    pub universe: Option<String>,
    pub species: Option<String>,
    pub image_url: Option<String>,
    pub abilities: Option<String>,
}

impl CharacterRecord {
    /// Merge an update over this record in place.
    pub fn apply(&mut self, update: UpdateRecord) {
        let UpdateRecord {
            title,
            body,
            universe,
            species,
            image_url,
            abilities,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(universe) = universe {
            self.universe = universe;
        }
        if let Some(species) = species {
            self.species = species;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(abilities) = abilities {
            self.abilities = abilities;
        }
    }
}

/// The two records every fresh store starts with (ids 1 and 2).
pub fn seed_records() -> Vec<CharacterRecord> {
    vec![
        CharacterRecord {
            id: 1,
            title: "Pikachu".to_string(),
            body: "Pokémon elétrico".to_string(),
            universe: "pokemon".to_string(),
            species: "Pokémon".to_string(),
            image_url:
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
                    .to_string(),
            abilities: "Choque do Trovão, Velocidade".to_string(),
        },
        CharacterRecord {
            id: 2,
            title: "Finn".to_string(),
            body: "Herói aventureiro".to_string(),
            universe: "aventura".to_string(),
            species: "Humano".to_string(),
            image_url: String::new(),
            abilities: "Espada, Coragem".to_string(),
        },
    ]
}
