//! The two themed universes a character can belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Universe tag attached to records, vocabulary sets and upstream sources.
///
/// The wire tags (`pokemon`, `aventura`) are the values stored in
/// [`CharacterRecord::universe`](crate::record::CharacterRecord::universe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Universe {
    /// Primary universe, backed by the paginated PokeAPI.
    #[serde(rename = "pokemon")]
    Pokemon,
    /// Secondary universe, backed by the flat Adventure Time sample API.
    #[serde(rename = "aventura")]
    AdventureTime,
}

impl Universe {
    /// All universes, primary first.
    pub const ALL: [Universe; 2] = [Universe::Pokemon, Universe::AdventureTime];

    /// The wire tag for this universe.
    pub fn as_str(self) -> &'static str {
        match self {
            Universe::Pokemon => "pokemon",
            Universe::AdventureTime => "aventura",
        }
    }

    /// Whether upstream failures for this universe may fall back to local data.
    pub fn has_local_fallback(self) -> bool {
        matches!(self, Universe::AdventureTime)
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Universe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pokemon" => Ok(Universe::Pokemon),
            "aventura" => Ok(Universe::AdventureTime),
            other => Err(CoreError::Validation(format!("unknown universe '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_wire_tags() {
        assert_eq!("pokemon".parse::<Universe>().unwrap(), Universe::Pokemon);
        assert_eq!(
            "aventura".parse::<Universe>().unwrap(),
            Universe::AdventureTime
        );
    }

    #[test]
    fn rejects_unknown_tag() {
        assert_matches!(
            "digimon".parse::<Universe>(),
            Err(CoreError::Validation(msg)) if msg.contains("digimon")
        );
    }

    #[test]
    fn display_matches_serde_tag() {
        for universe in Universe::ALL {
            let json = serde_json::to_value(universe).unwrap();
            assert_eq!(json, universe.to_string());
        }
    }

    #[test]
    fn only_secondary_has_fallback() {
        assert!(!Universe::Pokemon.has_local_fallback());
        assert!(Universe::AdventureTime.has_local_fallback());
    }
}
