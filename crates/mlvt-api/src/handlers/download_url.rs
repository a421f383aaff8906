use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::ids::parse_video_id;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mlvt_core::models::{ImageDownloadUrlResponse, VideoDownloadUrlResponse};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v1/videos/{id}/download-url/video",
    tag = "downloads",
    params(
        ("id" = u64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Download URL for the video file", body = VideoDownloadUrlResponse),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "generate_video_download_url"))]
pub async fn generate_video_download_url(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_video_id(&id)?;
    let video_download_url = state.videos.generate_download_url_for_video(id).await?;
    Ok(Json(VideoDownloadUrlResponse { video_download_url }))
}

#[utoipa::path(
    get,
    path = "/api/v1/videos/{id}/download-url/image",
    tag = "downloads",
    params(
        ("id" = u64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Download URL for the video's image", body = ImageDownloadUrlResponse),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video or image not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "generate_image_download_url"))]
pub async fn generate_image_download_url(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_video_id(&id)?;
    let image_download_url = state.videos.generate_download_url_for_image(id).await?;
    Ok(Json(ImageDownloadUrlResponse { image_download_url }))
}
