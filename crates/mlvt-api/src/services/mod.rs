pub mod video_lifecycle;

pub use video_lifecycle::{UploadFolders, VideoLifecycleService, VideoWithUrls};
