//! PokeAPI payloads and normalisation (primary universe).

use catalog_core::character::{ApiCharacter, CharacterOption};
use serde::Deserialize;

/// Species assigned to every character from this source.
pub const SPECIES: &str = "Pokémon";

/// Number of entries requested from the list endpoint.
pub const LIST_LIMIT: u32 = 10;

/// A `{ name, url }` reference as used throughout the PokeAPI.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /pokemon?limit=N`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPage {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// `GET /pokemon/{name}` (only the fields the catalog uses).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    pub sprites: Sprites,
    pub abilities: Vec<AbilitySlot>,
    pub types: Vec<TypeSlot>,
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Picker options keep the raw name as value so it can be fed back to the
/// detail endpoint.
pub fn normalize_listing(page: PokemonPage) -> Vec<CharacterOption> {
    page.results
        .into_iter()
        .map(|entry| {
            let label = capitalize(&entry.name);
            CharacterOption::new(entry.name, label)
        })
        .collect()
}

pub fn normalize_detail(detail: PokemonDetail) -> ApiCharacter {
    let abilities = detail
        .abilities
        .iter()
        .map(|slot| slot.ability.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let types = detail
        .types
        .iter()
        .map(|slot| slot.kind.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    ApiCharacter {
        name: capitalize(&detail.name),
        species: SPECIES.to_string(),
        image: detail.sprites.front_default.unwrap_or_default(),
        abilities,
        description: format!("Pokémon do tipo {types}."),
    }
}
