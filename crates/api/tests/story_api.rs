//! Integration tests for the `/api/stories` endpoints.

mod common;

use axum::http::StatusCode;
use catalog_core::story::{render_template, MISSING_SELECTION_MESSAGE, SAME_SELECTION_MESSAGE, STORY_TEMPLATES};
use common::{body_json, get, post_json};
use serde_json::json;

#[tokio::test]
async fn candidates_label_title_with_universe() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/stories/candidates").await).await;
    assert_eq!(
        json,
        json!([
            {"value": 1, "label": "Pikachu (pokemon)"},
            {"value": 2, "label": "Finn (aventura)"}
        ])
    );
}

#[tokio::test]
async fn same_character_twice_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/stories", json!({"first": 1, "second": 1})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "SELECTION_ERROR");
    assert_eq!(json["error"], SAME_SELECTION_MESSAGE);
}

#[tokio::test]
async fn missing_selection_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/stories", json!({"first": 1})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], MISSING_SELECTION_MESSAGE);
}

#[tokio::test]
async fn unknown_record_returns_404() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/stories", json!({"first": 1, "second": 42})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn story_uses_both_titles_in_order() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/stories", json!({"first": 1, "second": 2})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let index = json["story"]["templateIndex"].as_u64().unwrap() as usize;
    assert!(index < STORY_TEMPLATES.len());
    assert_eq!(
        json["story"]["text"],
        render_template(STORY_TEMPLATES[index], "Pikachu", "Finn")
    );

    assert_eq!(json["characters"][0]["title"], "Pikachu");
    assert_eq!(json["characters"][1]["title"], "Finn");
    assert_eq!(json["characters"][1]["species"], "Humano");
}

#[tokio::test]
async fn mistyped_selection_returns_json_400() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/stories", json!({"first": "Pikachu", "second": 2})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
