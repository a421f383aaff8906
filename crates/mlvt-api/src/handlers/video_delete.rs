use crate::constants::messages;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::ids::parse_video_id;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mlvt_core::models::MessageResponse;
use std::sync::Arc;

/// Delete a video record. Objects already in the bucket are not touched.
#[utoipa::path(
    delete,
    path = "/api/v1/videos/{id}",
    tag = "videos",
    params(
        ("id" = u64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video deleted", body = MessageResponse),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "delete_video"))]
pub async fn delete_video(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_video_id(&id)?;
    state.videos.delete_video(id).await?;
    Ok(Json(MessageResponse::new(messages::VIDEO_DELETED)))
}
