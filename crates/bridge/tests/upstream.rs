//! Drives [`CharacterBridge`] against local stand-in upstream servers.

use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use catalog_bridge::adventure;
use catalog_bridge::{BridgeConfig, BridgeError, CharacterBridge};
use catalog_core::character::CharacterOption;
use catalog_core::universe::Universe;
use serde_json::json;

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn bridge(pokeapi_url: String, adventure_time_url: String) -> CharacterBridge {
    CharacterBridge::new(BridgeConfig {
        pokeapi_url,
        adventure_time_url,
        timeout: Duration::from_secs(2),
    })
    .unwrap()
}

fn pokeapi_router() -> Router {
    Router::new()
        .route(
            "/pokemon",
            get(|| async {
                Json(json!({
                    "count": 2,
                    "results": [
                        {"name": "pikachu", "url": ""},
                        {"name": "eevee", "url": ""}
                    ]
                }))
            }),
        )
        .route(
            "/pokemon/pikachu",
            get(|| async {
                Json(json!({
                    "name": "pikachu",
                    "sprites": {"front_default": "https://img/25.png"},
                    "abilities": [
                        {"ability": {"name": "static"}},
                        {"ability": {"name": "lightning-rod"}}
                    ],
                    "types": [{"type": {"name": "electric"}}]
                }))
            }),
        )
        .route(
            "/pokemon/broken",
            get(|| async { Json(json!({"name": "broken"})) }),
        )
}

// ---------------------------------------------------------------------------
// Primary universe
// ---------------------------------------------------------------------------

#[tokio::test]
async fn primary_listing_is_normalized_and_cached() {
    let base = spawn_upstream(pokeapi_router()).await;
    let bridge = bridge(base, dead_url().await);

    let options = bridge.list_characters(Universe::Pokemon).await.unwrap();
    assert_eq!(
        options,
        vec![
            CharacterOption::new("pikachu", "Pikachu"),
            CharacterOption::new("eevee", "Eevee"),
        ]
    );

    let listing = bridge.last_listing().await.unwrap();
    assert_eq!(listing.universe, Universe::Pokemon);
    assert_eq!(
        bridge.resolve_option(Universe::Pokemon, "eevee").await,
        Some(CharacterOption::new("eevee", "Eevee"))
    );
    assert!(bridge
        .resolve_option(Universe::AdventureTime, "eevee")
        .await
        .is_none());
}

#[tokio::test]
async fn primary_detail_is_normalized() {
    let base = spawn_upstream(pokeapi_router()).await;
    let bridge = bridge(base, dead_url().await);

    let character = bridge
        .fetch_detail(Universe::Pokemon, "pikachu")
        .await
        .unwrap();
    assert_eq!(character.name, "Pikachu");
    assert_eq!(character.image, "https://img/25.png");
    assert_eq!(character.abilities, "static, lightning-rod");
    assert_eq!(character.description, "Pokémon do tipo electric.");
}

#[tokio::test]
async fn primary_listing_failure_propagates() {
    let bridge = bridge(dead_url().await, dead_url().await);
    assert_matches!(
        bridge.list_characters(Universe::Pokemon).await,
        Err(BridgeError::Request(_))
    );
    assert!(bridge.last_listing().await.is_none());
}

#[tokio::test]
async fn primary_detail_not_found_is_http_status() {
    let base = spawn_upstream(pokeapi_router()).await;
    let bridge = bridge(base, dead_url().await);
    assert_matches!(
        bridge.fetch_detail(Universe::Pokemon, "missingno").await,
        Err(BridgeError::HttpStatus { status: 404, .. })
    );
}

#[tokio::test]
async fn primary_detail_with_wrong_shape_is_reported() {
    let base = spawn_upstream(pokeapi_router()).await;
    let bridge = bridge(base, dead_url().await);
    assert_matches!(
        bridge.fetch_detail(Universe::Pokemon, "broken").await,
        Err(BridgeError::UnexpectedShape(msg)) if msg.contains("sprites")
    );
}

#[tokio::test]
async fn primary_detail_identifier_stays_one_path_segment() {
    let router = Router::new().route(
        "/pokemon/{name}",
        get(|Path(name): Path<String>| async move {
            Json(json!({
                "name": name,
                "sprites": {"front_default": null},
                "abilities": [],
                "types": []
            }))
        }),
    );
    let base = spawn_upstream(router).await;
    let bridge = bridge(base, dead_url().await);

    let character = bridge
        .fetch_detail(Universe::Pokemon, "mr/mime?limit=1")
        .await
        .unwrap();
    assert_eq!(character.name, "Mr/mime?limit=1");
}

#[tokio::test]
async fn primary_detail_rejects_dot_segments() {
    let bridge = bridge(dead_url().await, dead_url().await);
    assert_matches!(
        bridge.fetch_detail(Universe::Pokemon, "..").await,
        Err(BridgeError::InvalidUrl(_))
    );
    assert_matches!(
        bridge.fetch_detail(Universe::Pokemon, "").await,
        Err(BridgeError::InvalidUrl(_))
    );
}

// ---------------------------------------------------------------------------
// Secondary universe
// ---------------------------------------------------------------------------

#[tokio::test]
async fn secondary_listing_uses_upstream_when_available() {
    let router = Router::new().route(
        "/characters",
        get(|| async {
            Json(json!([
                {"id": 1, "name": "Finn"},
                {"id": 9, "name": "Gunter"}
            ]))
        }),
    );
    let base = spawn_upstream(router).await;
    let bridge = bridge(dead_url().await, base);

    let options = bridge.list_characters(Universe::AdventureTime).await.unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[1], CharacterOption::new("9", "Gunter"));
}

#[tokio::test]
async fn secondary_listing_falls_back_when_unreachable() {
    let bridge = bridge(dead_url().await, dead_url().await);
    let options = bridge.list_characters(Universe::AdventureTime).await.unwrap();
    assert_eq!(options, adventure::fallback_listing());
    assert_eq!(options.len(), 5);
}

#[tokio::test]
async fn secondary_listing_falls_back_on_error_status() {
    let router = Router::new().route(
        "/characters",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = spawn_upstream(router).await;
    let bridge = bridge(dead_url().await, base);

    let options = bridge.list_characters(Universe::AdventureTime).await.unwrap();
    assert_eq!(options, adventure::fallback_listing());
}

#[tokio::test]
async fn secondary_listing_falls_back_on_wrong_shape() {
    let router = Router::new().route(
        "/characters",
        get(|| async { Json(json!({"message": "rate limited"})) }),
    );
    let base = spawn_upstream(router).await;
    let bridge = bridge(dead_url().await, base);

    let options = bridge.list_characters(Universe::AdventureTime).await.unwrap();
    assert_eq!(options.len(), 5);
    assert_eq!(
        bridge.last_listing().await.unwrap().universe,
        Universe::AdventureTime
    );
}
