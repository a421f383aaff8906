//! Domain route groups (videos, uploads, downloads, payments).

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn video_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/videos", API_PREFIX),
            post(handlers::video_create::create_video),
        )
        .route(
            &format!("{}/videos/{{id}}", API_PREFIX),
            get(handlers::video_get::get_video).delete(handlers::video_delete::delete_video),
        )
        .route(
            &format!("{}/videos/{{id}}/status", API_PREFIX),
            get(handlers::video_status::get_video_status)
                .put(handlers::video_status::update_video_status),
        )
        .route(
            &format!("{}/videos/user/{{user_id}}", API_PREFIX),
            get(handlers::user_videos::list_user_videos),
        )
        .with_state(state)
}

pub fn upload_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/videos/generate-upload-url/video", API_PREFIX),
            post(handlers::upload_url::generate_video_upload_url),
        )
        .route(
            &format!("{}/videos/generate-upload-url/image", API_PREFIX),
            post(handlers::upload_url::generate_image_upload_url),
        )
        .with_state(state)
}

pub fn download_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/videos/{{id}}/download-url/video", API_PREFIX),
            get(handlers::download_url::generate_video_download_url),
        )
        .route(
            &format!("{}/videos/{{id}}/download-url/image", API_PREFIX),
            get(handlers::download_url::generate_image_download_url),
        )
        .with_state(state)
}

pub fn payment_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/payments/momo/signature", API_PREFIX),
            post(handlers::payment::sign_momo_payment),
        )
        .with_state(state)
}
