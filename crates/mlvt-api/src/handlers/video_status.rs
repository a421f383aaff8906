use crate::constants::messages;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use crate::utils::ids::parse_video_id;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mlvt_core::models::{MessageResponse, StatusResponse, UpdateStatusRequest};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v1/videos/{id}/status",
    tag = "videos",
    params(
        ("id" = u64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Current processing status", body = StatusResponse),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "get_video_status"))]
pub async fn get_video_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_video_id(&id)?;
    let status = state.videos.get_status(id).await?;
    Ok(Json(StatusResponse { status }))
}

#[utoipa::path(
    put,
    path = "/api/v1/videos/{id}/status",
    tag = "videos",
    params(
        ("id" = u64, Path, description = "Video ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 400, description = "Invalid video ID or body", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(video_id = %id, operation = "update_video_status"))]
pub async fn update_video_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Result<ValidatedJson<UpdateStatusRequest>, HttpAppError>,
) -> Result<impl IntoResponse, HttpAppError> {
    // The id is checked before the body so a bad id always reports as such.
    let id = parse_video_id(&id)?;
    let ValidatedJson(request) = body?;

    state.videos.update_status(id, request.status).await?;
    Ok(Json(MessageResponse::new(messages::STATUS_UPDATED)))
}
