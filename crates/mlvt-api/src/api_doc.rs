//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use mlvt_core::{models, payment};

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MLVT Video API",
        version = "0.1.0",
        description = "Video records, processing status and presigned upload/download URLs. All endpoints are versioned under /api/v1/."
    ),
    paths(
        // Videos
        handlers::video_create::create_video,
        handlers::video_get::get_video,
        handlers::video_delete::delete_video,
        handlers::video_status::get_video_status,
        handlers::video_status::update_video_status,
        handlers::user_videos::list_user_videos,
        // Uploads / downloads
        handlers::upload_url::generate_video_upload_url,
        handlers::upload_url::generate_image_upload_url,
        handlers::download_url::generate_video_download_url,
        handlers::download_url::generate_image_download_url,
        // Payments
        handlers::payment::sign_momo_payment,
    ),
    components(
        schemas(
            models::Video,
            models::VideoStatus,
            models::Frame,
            models::CreateVideoRequest,
            models::CreateVideoResponse,
            models::UpdateStatusRequest,
            models::StatusResponse,
            models::MessageResponse,
            models::VideoDetailResponse,
            models::UserVideosResponse,
            models::UploadUrlResponse,
            models::VideoDownloadUrlResponse,
            models::ImageDownloadUrlResponse,
            payment::SignPaymentRequest,
            payment::MomoPaymentRequest,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "videos", description = "Video records and processing status"),
        (name = "uploads", description = "Presigned upload URLs"),
        (name = "downloads", description = "Presigned download URLs"),
        (name = "payments", description = "MoMo payment request signing"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_every_route() {
        let spec = get_openapi_spec();
        for path in [
            "/api/v1/videos",
            "/api/v1/videos/{id}",
            "/api/v1/videos/{id}/status",
            "/api/v1/videos/user/{user_id}",
            "/api/v1/videos/generate-upload-url/video",
            "/api/v1/videos/generate-upload-url/image",
            "/api/v1/videos/{id}/download-url/video",
            "/api/v1/videos/{id}/download-url/image",
            "/api/v1/payments/momo/signature",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
