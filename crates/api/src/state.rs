use std::sync::Arc;

use catalog_bridge::CharacterBridge;
use catalog_core::store::RecordStore;
use catalog_core::vocabulary::FormVocabulary;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The catalog's records. Reset to the seed records on every start.
    pub store: Arc<RwLock<RecordStore>>,
    /// Client for both upstream character APIs.
    pub bridge: Arc<CharacterBridge>,
    /// Combined form vocabulary, built once at startup.
    pub vocabulary: Arc<FormVocabulary>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state around an explicit initial store.
    pub fn new(store: RecordStore, bridge: CharacterBridge, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            bridge: Arc::new(bridge),
            vocabulary: Arc::new(FormVocabulary::combined()),
            config: Arc::new(config),
        }
    }
}
