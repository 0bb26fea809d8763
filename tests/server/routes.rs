use std::fs;

use axum::{Router, routing::get};
use crisis_guide::{config::Config, server::with_edge_layers};
use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{spawn_default_server, spawn_router, spawn_server};

#[tokio::test]
async fn health_reports_service_identity() {
    let server = spawn_default_server().await;
    let response = server
        .client
        .get(server.url("/api/health"))
        .send()
        .await
        .expect("health request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("health body is json");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "crisis-guide");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptimeSeconds"].as_f64().is_some_and(|uptime| uptime >= 0.0));
}

#[tokio::test]
async fn text_endpoint_returns_classification() {
    let server = spawn_default_server().await;
    let response = server
        .client
        .post(server.url("/api/emergency"))
        .json(&json!({"message": "I smell gas"}))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("body is json");
    assert_eq!(body["type"], "gas-leak");
    assert_eq!(body["severity"], "LOW");
    assert_eq!(body["callEmergency"], true);
    assert_eq!(body["processingMode"], "text");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn inline_images_are_counted() {
    let server = spawn_default_server().await;
    let response = server
        .client
        .post(server.url("/api/emergency"))
        .json(&json!({
            "images": ["data:image/jpeg;base64,/9j/4AAQ", "iVBORw0KGgo="],
            "mode": "image"
        }))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("body is json");
    assert_eq!(body["type"], "image-analysis");
    assert_eq!(body["severity"], "HIGH");
    assert_eq!(body["callEmergency"], true);
    assert_eq!(body["processingMode"], "image");
}

#[tokio::test]
async fn empty_request_is_a_client_error() {
    let server = spawn_default_server().await;
    let response = server
        .client
        .post(server.url("/api/emergency"))
        .json(&json!({"message": ""}))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("error body is json");
    assert_eq!(body, json!({"error": "Message or images required"}));
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let server = spawn_default_server().await;
    let response = server
        .client
        .post(server.url("/api/emergency"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("error body is json");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn voice_endpoint_uses_voice_mode() {
    let server = spawn_default_server().await;
    let response = server
        .client
        .post(server.url("/api/emergency/voice"))
        .json(&json!({"transcript": "my baby is choking"}))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("body is json");
    assert_eq!(body["type"], "choking");
    assert_eq!(body["severity"], "CRITICAL");
    assert_eq!(body["processingMode"], "voice");
}

#[tokio::test]
async fn voice_endpoint_requires_transcript() {
    let server = spawn_default_server().await;
    let response = server
        .client
        .post(server.url("/api/emergency/voice"))
        .json(&json!({}))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("error body is json");
    assert_eq!(body, json!({"error": "Voice transcript required"}));
}

#[tokio::test]
async fn static_directory_is_served_as_fallback() {
    let dir = std::env::temp_dir().join(format!("crisis-guide-static-test-{}", Uuid::now_v7()));
    fs::create_dir_all(&dir).expect("static dir should be created");
    fs::write(dir.join("index.html"), "<h1>Crisis Guide</h1>").expect("index should be written");

    let mut config = Config::default();
    config.server.static_dir = Some(dir.clone());
    let server = spawn_server(config).await;

    let response = server
        .client
        .get(server.url("/index.html"))
        .send()
        .await
        .expect("static request should succeed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.text().await.expect("static body"),
        "<h1>Crisis Guide</h1>"
    );

    let _ = fs::remove_dir_all(&dir);
}

async fn panicking_handler() -> &'static str {
    panic!("guidance table corrupted")
}

#[tokio::test]
async fn handler_panic_reaches_client_as_generic_internal_error() {
    let config = Config::default();
    let router = with_edge_layers(
        Router::new().route("/api/explode", get(panicking_handler)),
        &config.server,
    );
    let server = spawn_router(router).await;

    let response = server
        .client
        .get(server.url("/api/explode"))
        .send()
        .await
        .expect("request should get a response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.expect("body is json");
    assert_eq!(body, json!({"error": "Internal server error"}));

    let again = server
        .client
        .get(server.url("/api/explode"))
        .send()
        .await
        .expect("server should keep serving after a panic");
    assert_eq!(again.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
