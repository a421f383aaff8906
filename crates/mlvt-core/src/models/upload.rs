use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::{IntoParams, ToSchema};

/// Which configured folder an upload URL targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Video,
    Image,
}

impl Display for UploadKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadKind::Video => write!(f, "video"),
            UploadKind::Image => write!(f, "image"),
        }
    }
}

/// Query of `POST /videos/generate-upload-url/{video|image}`.
/// Both fields default to empty so a missing name is reported by the
/// issuer as invalid input rather than by the extractor.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct UploadUrlQuery {
    /// Object file name, e.g. `clip.mp4`
    #[serde(default)]
    pub file_name: String,
    /// MIME type the upload must be sent with
    #[serde(default)]
    pub file_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadUrlResponse {
    pub upload_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoDownloadUrlResponse {
    pub video_download_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageDownloadUrlResponse {
    pub image_download_url: String,
}
