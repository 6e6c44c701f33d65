//! Upstream character sources.
//!
//! [`CharacterBridge`] talks to the PokeAPI (primary universe) and the
//! Adventure Time sample API (secondary universe) and normalises both into
//! [`catalog_core::character::ApiCharacter`] and
//! [`catalog_core::character::CharacterOption`].

pub mod adventure;
pub mod client;
pub mod error;
pub mod pokeapi;

pub use client::{BridgeConfig, CharacterBridge, Listing};
pub use error::BridgeError;
