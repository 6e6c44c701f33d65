#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::config::{ServerConfig, DEFAULT_PUBLIC_DIR};
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_bridge::{BridgeConfig, CharacterBridge};
use catalog_core::store::RecordStore;

/// Base URL with nothing listening, so every upstream call fails fast.
pub const DEAD_UPSTREAM: &str = "http://127.0.0.1:1";

/// Build a test `ServerConfig` with safe defaults.
///
/// Upstreams point at a dead address and the story delay is disabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        public_dir: DEFAULT_PUBLIC_DIR.into(),
        story_delay_ms: 0,
        bridge: BridgeConfig {
            pokeapi_url: DEAD_UPSTREAM.to_string(),
            adventure_time_url: DEAD_UPSTREAM.to_string(),
            timeout: Duration::from_secs(2),
        },
    }
}

/// Build the full application router around `store` and `config`.
pub fn build_app_with(store: RecordStore, config: ServerConfig) -> Router {
    let bridge = CharacterBridge::new(config.bridge.clone()).unwrap();
    let state = AppState::new(store, bridge, config.clone());
    build_app_router(state, &config)
}

/// Full application router over the two seed records.
///
/// Clones of the returned router share the same store.
pub fn build_test_app() -> Router {
    build_app_with(RecordStore::seeded(), test_config())
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Send `body` verbatim, without a content-type header.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
