//! Presigned upload URLs.
//!
//! The client PUTs the object straight to the bucket; the record itself is
//! created afterwards through `POST /videos`.

use crate::error::{ErrorResponse, HttpAppError, ValidatedQuery};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use mlvt_core::models::{UploadKind, UploadUrlQuery, UploadUrlResponse};
use std::sync::Arc;

async fn issue_upload_url(
    state: &AppState,
    kind: UploadKind,
    query: UploadUrlQuery,
) -> Result<Json<UploadUrlResponse>, HttpAppError> {
    let upload_url = state
        .videos
        .generate_upload_url(kind, &query.file_name, &query.file_type)
        .await?;
    Ok(Json(UploadUrlResponse { upload_url }))
}

#[utoipa::path(
    post,
    path = "/api/v1/videos/generate-upload-url/video",
    tag = "uploads",
    params(UploadUrlQuery),
    responses(
        (status = 200, description = "Upload URL for a video file", body = UploadUrlResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, query), fields(file_name = %query.file_name, operation = "generate_video_upload_url"))]
pub async fn generate_video_upload_url(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<UploadUrlQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    issue_upload_url(&state, UploadKind::Video, query).await
}

#[utoipa::path(
    post,
    path = "/api/v1/videos/generate-upload-url/image",
    tag = "uploads",
    params(UploadUrlQuery),
    responses(
        (status = 200, description = "Upload URL for an image file", body = UploadUrlResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, query), fields(file_name = %query.file_name, operation = "generate_image_upload_url"))]
pub async fn generate_image_upload_url(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<UploadUrlQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    issue_upload_url(&state, UploadKind::Image, query).await
}
