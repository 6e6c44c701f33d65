use std::path::PathBuf;
use std::time::Duration;

use catalog_bridge::client::{DEFAULT_ADVENTURE_TIME_URL, DEFAULT_POKEAPI_URL};
use catalog_bridge::BridgeConfig;
use catalog_core::story::DEFAULT_STORY_DELAY_MS;

/// Directory holding the static entry page when `PUBLIC_DIR` is unset.
pub const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served at `/`.
    pub public_dir: PathBuf,
    /// Cosmetic delay before a story response, in milliseconds.
    pub story_delay_ms: u64,
    /// Upstream character API settings.
    pub bridge: BridgeConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                    |
    /// |-------------------------|--------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                  |
    /// | `PORT`                  | `3000`                                     |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`                    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                       |
    /// | `PUBLIC_DIR`            | `crates/api/public`                        |
    /// | `STORY_DELAY_MS`        | `1500`                                     |
    /// | `POKEAPI_URL`           | `https://pokeapi.co/api/v2`                |
    /// | `ADVENTURE_TIME_URL`    | `https://api.sampleapis.com/adventuretime` |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10`                                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR));

        let story_delay_ms: u64 = std::env::var("STORY_DELAY_MS")
            .map(|v| v.parse().expect("STORY_DELAY_MS must be a valid u64"))
            .unwrap_or(DEFAULT_STORY_DELAY_MS);

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let bridge = BridgeConfig {
            pokeapi_url: std::env::var("POKEAPI_URL")
                .unwrap_or_else(|_| DEFAULT_POKEAPI_URL.into()),
            adventure_time_url: std::env::var("ADVENTURE_TIME_URL")
                .unwrap_or_else(|_| DEFAULT_ADVENTURE_TIME_URL.into()),
            timeout: Duration::from_secs(upstream_timeout_secs),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_dir,
            story_delay_ms,
            bridge,
        }
    }
}
