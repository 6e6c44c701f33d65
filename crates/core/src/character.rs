//! Transient character shapes produced by the upstream bridge.

use serde::{Deserialize, Serialize};

/// A character normalised from either upstream source.
///
/// Consumed once to populate the form, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCharacter {
    pub name: String,
    pub species: String,
    pub image: String,
    /// Comma-joined ability names.
    pub abilities: String,
    pub description: String,
}

/// One entry of an upstream character listing, as offered in a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterOption {
    /// Identifier passed back when fetching the character's detail.
    pub value: String,
    /// Display name.
    pub label: String,
}

impl CharacterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
