use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use super::{Frame, UserId, VideoId};

/// Processing lifecycle of a video. New records always start in `Raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "video_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Raw,
    Processing,
    Success,
    Failed,
}

impl VideoStatus {
    pub const ALL: [VideoStatus; 4] = [
        VideoStatus::Raw,
        VideoStatus::Processing,
        VideoStatus::Success,
        VideoStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::Raw => "raw",
            VideoStatus::Processing => "processing",
            VideoStatus::Success => "success",
            VideoStatus::Failed => "failed",
        }
    }
}

impl Display for VideoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown video status: {0}")]
pub struct ParseVideoStatusError(pub String);

impl FromStr for VideoStatus {
    type Err = ParseVideoStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(VideoStatus::Raw),
            "processing" => Ok(VideoStatus::Processing),
            "success" => Ok(VideoStatus::Success),
            "failed" => Ok(VideoStatus::Failed),
            other => Err(ParseVideoStatusError(other.to_string())),
        }
    }
}

/// A stored video record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    /// Length in seconds
    pub duration: i64,
    pub description: String,
    pub file_name: String,
    pub folder: String,
    /// File name of the thumbnail image; empty when the video has none
    pub image: String,
    pub status: VideoStatus,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }
}

/// Everything the store needs to create a video. There is no status field:
/// the store always inserts `VideoStatus::Raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub duration: i64,
    pub description: String,
    pub file_name: String,
    pub folder: String,
    pub image: String,
    pub user_id: UserId,
}

/// Body of `POST /videos`
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateVideoRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,
    /// Length in seconds
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub description: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "File name must be between 1 and 255 characters"
    ))]
    pub file_name: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Folder must be between 1 and 255 characters"
    ))]
    pub folder: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Image must be at most 255 characters"))]
    pub image: String,
    pub user_id: UserId,
    /// Accepted for compatibility and ignored: new videos always start as `raw`
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Option<serde_json::Value>,
}

impl From<CreateVideoRequest> for NewVideo {
    fn from(req: CreateVideoRequest) -> Self {
        NewVideo {
            title: req.title,
            duration: req.duration,
            description: req.description,
            file_name: req.file_name,
            folder: req.folder,
            image: req.image,
            user_id: req.user_id,
        }
    }
}

/// Body of `PUT /videos/{id}/status`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: VideoStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: VideoStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVideoResponse {
    pub message: String,
    pub video_id: VideoId,
}

/// A video together with time-limited download URLs for its file and image.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoDetailResponse {
    pub video: Video,
    pub video_url: String,
    /// Absent when the video has no image
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserVideosResponse {
    pub videos: Vec<Video>,
    pub frames: Vec<Frame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CreateVideoRequest {
        CreateVideoRequest {
            title: "Test Video".to_string(),
            duration: 120,
            description: "A sample".to_string(),
            file_name: "clip.mp4".to_string(),
            folder: "videos".to_string(),
            image: "clip.jpg".to_string(),
            user_id: 7,
            status: None,
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&VideoStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let parsed: VideoStatus = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(parsed, VideoStatus::Success);
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        assert!(serde_json::from_str::<VideoStatus>("\"done\"").is_err());
        assert_eq!(
            "Raw".parse::<VideoStatus>(),
            Err(ParseVideoStatusError("Raw".to_string()))
        );
    }

    #[test]
    fn test_status_display_matches_from_str() {
        for status in VideoStatus::ALL {
            assert_eq!(status.to_string().parse::<VideoStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_create_request_validation() {
        assert!(sample_request().validate().is_ok());

        let mut req = sample_request();
        req.file_name = String::new();
        assert!(req.validate().is_err());

        let mut req = sample_request();
        req.folder = String::new();
        assert!(req.validate().is_err());

        let mut req = sample_request();
        req.duration = -1;
        assert!(req.validate().is_err());

        let mut req = sample_request();
        req.image = String::new();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_ignores_status() {
        let req: CreateVideoRequest = serde_json::from_value(serde_json::json!({
            "title": "Test Video",
            "duration": 120,
            "file_name": "clip.mp4",
            "folder": "videos",
            "user_id": 1,
            "status": "success"
        }))
        .unwrap();
        assert!(req.status.is_some());
        let new_video: NewVideo = req.into();
        assert_eq!(new_video.title, "Test Video");
        assert_eq!(new_video.image, "");
    }

    #[test]
    fn test_update_status_request_requires_known_status() {
        let ok: Result<UpdateStatusRequest, _> =
            serde_json::from_value(serde_json::json!({"status": "failed"}));
        assert_eq!(ok.unwrap().status, VideoStatus::Failed);
        let bad: Result<UpdateStatusRequest, _> =
            serde_json::from_value(serde_json::json!({"status": "archived"}));
        assert!(bad.is_err());
    }
}
