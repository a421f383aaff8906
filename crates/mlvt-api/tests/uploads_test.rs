//! Presigned upload and download URL API tests.
//!
//! Run with: `cargo test -p mlvt-api --test uploads_test`

mod helpers;

use helpers::{api_path, create_video, error_message, setup_test_app, video_body};
use mlvt_storage::UrlOperation;
use serde_json::{json, Value};

#[tokio::test]
async fn test_video_upload_url_targets_video_folder() {
    let app = setup_test_app();
    let response = app
        .client()
        .post(&api_path("/videos/generate-upload-url/video"))
        .add_query_param("file_name", "movie.mp4")
        .add_query_param("file_type", "video/mp4")
        .await;
    assert_eq!(response.status_code(), 200);

    let upload_url = response.json::<Value>()["upload_url"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(upload_url.contains("videos/movie.mp4"));
    assert!(upload_url.contains("method=PUT"));
    assert!(upload_url.contains("expires=900"));

    let calls = app.issuer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, UrlOperation::Upload);
    assert_eq!(calls[0].file_type, "video/mp4");
}

#[tokio::test]
async fn test_image_upload_url_targets_image_folder() {
    let app = setup_test_app();
    let response = app
        .client()
        .post(&api_path("/videos/generate-upload-url/image"))
        .add_query_param("file_name", "thumb.jpg")
        .add_query_param("file_type", "image/jpeg")
        .await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<Value>();
    assert!(body["upload_url"]
        .as_str()
        .unwrap()
        .contains("frames/thumb.jpg"));
}

#[tokio::test]
async fn test_upload_url_without_file_name_is_invalid() {
    let app = setup_test_app();
    let client = app.client();

    let response = client
        .post(&api_path("/videos/generate-upload-url/video"))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(error_message(&response.json::<Value>()), "invalid input");

    let response = client
        .post(&api_path("/videos/generate-upload-url/image"))
        .add_query_param("file_name", "")
        .add_query_param("file_type", "image/png")
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_upload_url_issuer_failure_is_internal_error() {
    let app = setup_test_app();
    app.issuer.set_failing(true);

    let response = app
        .client()
        .post(&api_path("/videos/generate-upload-url/video"))
        .add_query_param("file_name", "movie.mp4")
        .add_query_param("file_type", "video/mp4")
        .await;
    assert_eq!(response.status_code(), 500);
    let body = response.json::<Value>();
    assert_eq!(error_message(&body), "internal server error");
    assert_eq!(body["code"], "ISSUER_UNAVAILABLE");
}

#[tokio::test]
async fn test_download_urls_for_video_and_image() {
    let app = setup_test_app();
    let client = app.client();
    let id = create_video(client, video_body("Test Video", 1)).await;

    let response = client
        .get(&api_path(&format!("/videos/{}/download-url/video", id)))
        .await;
    assert_eq!(response.status_code(), 200);
    assert!(response.json::<Value>()["video_download_url"]
        .as_str()
        .unwrap()
        .contains("videos/clip.mp4"));

    let response = client
        .get(&api_path(&format!("/videos/{}/download-url/image", id)))
        .await;
    assert_eq!(response.status_code(), 200);
    assert!(response.json::<Value>()["image_download_url"]
        .as_str()
        .unwrap()
        .contains("frames/clip.jpg"));

    assert!(app
        .issuer
        .calls()
        .iter()
        .all(|call| call.operation == UrlOperation::Download && call.file_type.is_empty()));
}

#[tokio::test]
async fn test_download_url_for_missing_video_or_image() {
    let app = setup_test_app();
    let client = app.client();

    let response = client.get(&api_path("/videos/77/download-url/video")).await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(error_message(&response.json::<Value>()), "video not found");

    let mut body = video_body("No Thumbnail", 1);
    body["image"] = json!("");
    let id = create_video(client, body).await;

    let response = client
        .get(&api_path(&format!("/videos/{}/download-url/image", id)))
        .await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(error_message(&response.json::<Value>()), "image not found");
    assert!(app.issuer.calls().is_empty());
}

#[tokio::test]
async fn test_get_video_fails_whole_when_issuer_fails() {
    let app = setup_test_app();
    let client = app.client();
    let id = create_video(client, video_body("Test Video", 1)).await;
    app.issuer.set_failing(true);

    let response = client.get(&api_path(&format!("/videos/{}", id))).await;
    assert_eq!(response.status_code(), 500);
    let body = response.json::<Value>();
    assert!(body.get("video").is_none());
    assert_eq!(error_message(&body), "internal server error");
}
