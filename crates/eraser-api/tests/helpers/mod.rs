//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p eraser-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use eraser_api::setup::routes;
use eraser_api::state::AppState;
use eraser_core::Config;
use eraser_processing::CleaningPipeline;
use std::sync::Arc;

pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

pub fn create_test_config() -> Config {
    Config {
        static_dir: "tests/static-missing".to_string(),
        ..Config::default()
    }
}

/// Test server over the real router with the default config.
pub fn setup_test_server() -> TestServer {
    setup_test_server_with(create_test_config())
}

pub fn setup_test_server_with(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config.clone(), CleaningPipeline::default()));
    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}

/// Multipart form with a single `image` part.
pub fn image_form(data: Vec<u8>, filename: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename.to_string())
        .mime_type(mime_type.to_string());
    MultipartForm::new().add_part("image", part)
}

pub async fn post_image(
    client: &TestServer,
    data: Vec<u8>,
    filename: &str,
    mime_type: &str,
) -> TestResponse {
    client
        .post("/clean")
        .multipart(image_form(data, filename, mime_type))
        .await
}

/// Decode the `image_url` data URI of a successful clean response.
pub fn decode_image_url(body: &serde_json::Value) -> Vec<u8> {
    let url = body["image_url"].as_str().expect("image_url missing");
    let payload = url
        .strip_prefix(DATA_URI_PREFIX)
        .expect("image_url is not a JPEG data URI");
    STANDARD.decode(payload).expect("image_url is not base64")
}
