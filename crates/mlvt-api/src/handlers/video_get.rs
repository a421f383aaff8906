use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::ids::parse_video_id;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mlvt_core::models::VideoDetailResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v1/videos/{id}",
    tag = "videos",
    params(
        ("id" = u64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video with download URLs", body = VideoDetailResponse),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "get_video"))]
pub async fn get_video(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_video_id(&id)?;
    let found = state.videos.get_video_by_id(id).await?;

    Ok(Json(VideoDetailResponse {
        video: found.video,
        video_url: found.video_url,
        image_url: found.image_url,
    }))
}
