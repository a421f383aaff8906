use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::ids::parse_user_id;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mlvt_core::models::UserVideosResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v1/videos/user/{user_id}",
    tag = "videos",
    params(
        ("user_id" = u64, Path, description = "Owner user ID")
    ),
    responses(
        (status = 200, description = "Videos of the user and their frames", body = UserVideosResponse),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %user_id, operation = "list_user_videos"))]
pub async fn list_user_videos(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let user_id = parse_user_id(&user_id)?;
    let (videos, frames) = state.videos.list_videos_by_user_id(user_id).await?;
    Ok(Json(UserVideosResponse { videos, frames }))
}
