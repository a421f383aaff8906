//! Test helpers: build the real router over in-memory fakes.
//!
//! Run from workspace root: `cargo test -p mlvt-api`. No Docker or AWS
//! access needed; the Postgres store has its own tests in `mlvt-db`.

#![allow(dead_code)]

use axum_test::TestServer;
use mlvt_api::constants;
use mlvt_api::setup::routes;
use mlvt_api::{AppState, UploadFolders, VideoLifecycleService};
use mlvt_core::config::VideoServiceConfig;
use mlvt_core::{BaseConfig, Config, MomoConfig, StorageConfig};
use mlvt_db::MemoryVideoStore;
use mlvt_storage::StaticUrlIssuer;
use serde_json::{json, Value};
use std::sync::Arc;

pub const TEST_VIDEO_FOLDER: &str = "videos";
pub const TEST_IMAGE_FOLDER: &str = "frames";

/// API path prefix for tests (e.g. `/api/v1`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server plus handles on the fakes behind it.
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryVideoStore,
    pub issuer: StaticUrlIssuer,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_momo_config() -> MomoConfig {
    MomoConfig {
        partner_code: "MOMO".to_string(),
        access_key: "access-key".to_string(),
        secret_key: "secret-key".to_string(),
    }
}

pub fn test_config(momo: Option<MomoConfig>) -> Config {
    Config(Box::new(VideoServiceConfig {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            db_max_connections: 1,
            db_timeout_seconds: 1,
            http_concurrency_limit: 64,
            max_request_body_bytes: 64 * 1024,
            environment: "test".to_string(),
            log_format: "compact".to_string(),
        },
        database_url: "postgresql://localhost/unused".to_string(),
        storage: StorageConfig {
            bucket: "mlvt-test".to_string(),
            region: "us-east-1".to_string(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            video_folder: TEST_VIDEO_FOLDER.to_string(),
            image_folder: TEST_IMAGE_FOLDER.to_string(),
        },
        momo,
    }))
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with(None)
}

pub fn setup_test_app_with(momo: Option<MomoConfig>) -> TestApp {
    let config = test_config(momo);
    let store = MemoryVideoStore::new();
    let issuer = StaticUrlIssuer::default();

    let videos = VideoLifecycleService::new(
        Arc::new(store.clone()),
        Arc::new(issuer.clone()),
        UploadFolders::from_config(config.storage()),
    );
    let state = Arc::new(AppState::new(videos, config.momo().cloned()));
    let router = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        store,
        issuer,
    }
}

pub fn video_body(title: &str, user_id: u64) -> Value {
    json!({
        "title": title,
        "duration": 120,
        "description": "integration test video",
        "file_name": "clip.mp4",
        "folder": "videos",
        "image": "clip.jpg",
        "user_id": user_id
    })
}

/// Create a video through the API and return its id.
pub async fn create_video(client: &TestServer, body: Value) -> u64 {
    let response = client.post(&api_path("/videos")).json(&body).await;
    assert_eq!(response.status_code(), 201);
    response.json::<Value>()["video_id"]
        .as_u64()
        .expect("video_id in create response")
}

pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
