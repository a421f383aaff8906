use crate::constants::messages;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use mlvt_core::models::{CreateVideoRequest, CreateVideoResponse};
use std::sync::Arc;

/// Register a new video. The record always starts in `raw`; a `status`
/// in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/v1/videos",
    tag = "videos",
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Video created", body = CreateVideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_video"))]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateVideoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state.videos.create_video(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateVideoResponse {
            message: messages::VIDEO_ADDED.to_string(),
            video_id: video.id,
        }),
    ))
}
