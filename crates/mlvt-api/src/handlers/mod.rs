pub mod download_url;
pub mod payment;
pub mod upload_url;
pub mod user_videos;
pub mod video_create;
pub mod video_delete;
pub mod video_get;
pub mod video_status;
