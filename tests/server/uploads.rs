use crisis_guide::config::{Config, UploadLimits};
use reqwest::{
    StatusCode,
    multipart::{Form, Part},
};
use serde_json::Value;

use crate::{TestServer, spawn_default_server, spawn_server};

fn image_part(name: &str, bytes: Vec<u8>) -> Part {
    Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str("image/png")
        .expect("mime should parse")
}

async fn upload(server: &TestServer, form: Form) -> (StatusCode, Value) {
    let response = server
        .client
        .post(server.url("/api/emergency/upload"))
        .multipart(form)
        .send()
        .await
        .expect("upload should complete");
    let status = response.status();
    let body = response.json().await.expect("upload body is json");
    (status, body)
}

#[tokio::test]
async fn uploaded_images_without_text_are_image_analysis() {
    let server = spawn_default_server().await;
    let form = Form::new()
        .part("images", image_part("a.png", vec![0x89, 0x50, 0x4e, 0x47]))
        .part("images", image_part("b.png", vec![0x89, 0x50, 0x4e, 0x47]));

    let (status, body) = upload(&server, form).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "image-analysis");
    assert_eq!(body["severity"], "HIGH");
    assert_eq!(body["callEmergency"], true);
    assert_eq!(body["processingMode"], "image");

    let log: Value = server
        .client
        .get(server.url("/api/session-log"))
        .send()
        .await
        .expect("session log request should succeed")
        .json()
        .await
        .expect("session log body is json");
    assert_eq!(log["entries"][0]["imageCount"], 2);
    assert_eq!(log["entries"][0]["mode"], "image");
}

#[tokio::test]
async fn uploaded_message_drives_the_category() {
    let server = spawn_default_server().await;
    let form = Form::new()
        .text("message", "smoke in the hallway")
        .part("images", image_part("hall.png", vec![1, 2, 3]));

    let (status, body) = upload(&server, form).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "fire");
    assert_eq!(body["severity"], "CRITICAL");
}

#[tokio::test]
async fn non_image_files_are_rejected() {
    let server = spawn_default_server().await;
    let document = Part::bytes(b"%PDF-1.7".to_vec())
        .file_name("report.pdf")
        .mime_str("application/pdf")
        .expect("mime should parse");
    let form = Form::new().text("message", "fire").part("images", document);

    let (status, body) = upload(&server, form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|error| error.contains("Only image files"))
    );
}

#[tokio::test]
async fn too_many_files_are_rejected() {
    let server = spawn_default_server().await;
    let mut form = Form::new();
    for index in 0..6 {
        form = form.part("images", image_part(&format!("{index}.png"), vec![0; 4]));
    }

    let (status, body) = upload(&server, form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|error| error.contains("At most 5"))
    );
}

#[tokio::test]
async fn oversized_files_are_rejected() {
    let mut config = Config::default();
    config.uploads = UploadLimits {
        max_files: 5,
        max_file_bytes: 8,
    };
    let server = spawn_server(config).await;
    let form = Form::new().part("images", image_part("big.png", vec![7; 64]));

    let (status, _) = upload(&server, form).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn empty_upload_is_rejected() {
    let server = spawn_default_server().await;
    let (status, body) = upload(&server, Form::new().text("message", "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message or images required");
}
