//! HTTP client over both upstream character APIs.

use std::time::Duration;

use catalog_core::character::{ApiCharacter, CharacterOption};
use catalog_core::universe::Universe;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::error::BridgeError;
use crate::{adventure, pokeapi};

/// Default PokeAPI base URL.
pub const DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Default Adventure Time sample API base URL.
pub const DEFAULT_ADVENTURE_TIME_URL: &str = "https://api.sampleapis.com/adventuretime";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream base URLs and request timeout.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub pokeapi_url: String,
    pub adventure_time_url: String,
    pub timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            pokeapi_url: DEFAULT_POKEAPI_URL.to_string(),
            adventure_time_url: DEFAULT_ADVENTURE_TIME_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The most recent listing handed out, kept so a picker value can be
/// resolved back to its option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub universe: Universe,
    pub options: Vec<CharacterOption>,
}

/// Fetches and normalises characters from both universes.
pub struct CharacterBridge {
    client: reqwest::Client,
    config: BridgeConfig,
    last_listing: RwLock<Option<Listing>>,
}

impl CharacterBridge {
    pub fn new(config: BridgeConfig) -> Result<Self, BridgeError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: BridgeConfig) -> Self {
        Self {
            client,
            config,
            last_listing: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// List the characters of `universe`.
    ///
    /// Failures propagate unless the universe has a local fallback, in which
    /// case any upstream problem yields the fixed fallback listing.
    pub async fn list_characters(
        &self,
        universe: Universe,
    ) -> Result<Vec<CharacterOption>, BridgeError> {
        let fetched = match universe {
            Universe::Pokemon => self.list_pokemon().await,
            Universe::AdventureTime => self.list_adventure_time().await,
        };
        let options = match fetched {
            Ok(options) => options,
            Err(e) if universe.has_local_fallback() => {
                tracing::warn!(%universe, error = %e, "Upstream listing unavailable, using local listing");
                adventure::fallback_listing()
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(%universe, count = options.len(), "Loaded character listing");
        *self.last_listing.write().await = Some(Listing {
            universe,
            options: options.clone(),
        });
        Ok(options)
    }

    /// Fetch and normalise one character.
    ///
    /// Only the primary universe calls upstream; secondary details come from
    /// the local table.
    pub async fn fetch_detail(
        &self,
        universe: Universe,
        identifier: &str,
    ) -> Result<ApiCharacter, BridgeError> {
        match universe {
            Universe::Pokemon => {
                if matches!(identifier, "" | "." | "..") {
                    return Err(BridgeError::InvalidUrl(format!(
                        "'{identifier}' is not a character identifier"
                    )));
                }
                let url = endpoint(&self.config.pokeapi_url, &["pokemon", identifier])?;
                let detail: pokeapi::PokemonDetail = self.get_json(url).await?;
                Ok(pokeapi::normalize_detail(detail))
            }
            Universe::AdventureTime => Ok(adventure::detail(identifier)),
        }
    }

    pub async fn last_listing(&self) -> Option<Listing> {
        self.last_listing.read().await.clone()
    }

    /// Find the option with `value` in the last listing of `universe`.
    pub async fn resolve_option(&self, universe: Universe, value: &str) -> Option<CharacterOption> {
        let guard = self.last_listing.read().await;
        guard
            .as_ref()
            .filter(|listing| listing.universe == universe)
            .and_then(|listing| listing.options.iter().find(|o| o.value == value))
            .cloned()
    }

    // ---- private helpers ----

    async fn list_pokemon(&self) -> Result<Vec<CharacterOption>, BridgeError> {
        let mut url = endpoint(&self.config.pokeapi_url, &["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &pokeapi::LIST_LIMIT.to_string());
        let page: pokeapi::PokemonPage = self.get_json(url).await?;
        Ok(pokeapi::normalize_listing(page))
    }

    async fn list_adventure_time(&self) -> Result<Vec<CharacterOption>, BridgeError> {
        let url = endpoint(&self.config.adventure_time_url, &["characters"])?;
        let entries: Vec<adventure::AdventureEntry> = self.get_json(url).await?;
        Ok(adventure::normalize_listing(entries))
    }

    /// GET `url` and decode a JSON body, mapping non-2xx statuses and
    /// malformed payloads to [`BridgeError`].
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, BridgeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| BridgeError::UnexpectedShape(e.to_string()))
    }
}

/// Append `segments` to the path of `base`, percent-encoding each one.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, BridgeError> {
    let mut url =
        Url::parse(base).map_err(|e| BridgeError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| BridgeError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
