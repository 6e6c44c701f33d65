//! Adventure Time source (secondary universe).
//!
//! Only the list call goes upstream. Details come from a fixed local table,
//! and the list itself falls back to the same five characters whenever the
//! upstream cannot be used.

use catalog_core::character::{ApiCharacter, CharacterOption};
use serde::Deserialize;

/// One entry of the upstream `/characters` array.
#[derive(Debug, Clone, Deserialize)]
pub struct AdventureEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

struct KnownCharacter {
    id: &'static str,
    name: &'static str,
    species: &'static str,
    abilities: &'static str,
    description: &'static str,
}

const KNOWN: [KnownCharacter; 5] = [
    KnownCharacter {
        id: "1",
        name: "Finn",
        species: "Humano",
        abilities: "Espada, Coragem",
        description: "Herói aventureiro",
    },
    KnownCharacter {
        id: "2",
        name: "Jake",
        species: "Cachorro Mágico",
        abilities: "Esticar, Magia",
        description: "Melhor amigo de Finn",
    },
    KnownCharacter {
        id: "3",
        name: "Princess Bubblegum",
        species: "Chiclete",
        abilities: "Ciência, Liderança",
        description: "Princesa do Reino Doce",
    },
    KnownCharacter {
        id: "4",
        name: "Marceline",
        species: "Vampira",
        abilities: "Voo, Música",
        description: "Rainha dos Vampiros",
    },
    KnownCharacter {
        id: "5",
        name: "Ice King",
        species: "Humano",
        abilities: "Magia de Gelo",
        description: "Rei do Gelo",
    },
];

/// The five-entry listing used when the upstream list call fails.
pub fn fallback_listing() -> Vec<CharacterOption> {
    KNOWN
        .iter()
        .map(|c| CharacterOption::new(c.id, c.name))
        .collect()
}

/// Options use the upstream id, or the list position when an entry has none.
pub fn normalize_listing(entries: Vec<AdventureEntry>) -> Vec<CharacterOption> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let value = entry
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| index.to_string());
            CharacterOption::new(value, entry.name)
        })
        .collect()
}

/// Look up a character in the local table.
///
/// Unknown identifiers resolve to a generic placeholder character.
pub fn detail(identifier: &str) -> ApiCharacter {
    match KNOWN.iter().find(|c| c.id == identifier) {
        Some(c) => ApiCharacter {
            name: c.name.to_string(),
            species: c.species.to_string(),
            image: String::new(),
            abilities: c.abilities.to_string(),
            description: c.description.to_string(),
        },
        None => unknown_character(),
    }
}

pub fn unknown_character() -> ApiCharacter {
    ApiCharacter {
        name: "Personagem Desconhecido".to_string(),
        species: "Desconhecida".to_string(),
        image: String::new(),
        abilities: "Desconhecidas".to_string(),
        description: "Personagem de Hora de Aventura".to_string(),
    }
}
