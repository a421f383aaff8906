//! Video record store abstraction
//!
//! The store only persists; whether a status transition is allowed is decided
//! by the lifecycle service. "Not found" is never an error here: lookups return
//! `Ok(None)` and mutations return `Ok(false)` when no row matched.

use async_trait::async_trait;
use mlvt_core::models::{Frame, NewVideo, UserId, Video, VideoId, VideoStatus};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An id that cannot be represented by the backing column type.
    #[error("Id out of range: {0}")]
    IdOutOfRange(u64),

    /// A stored row that cannot be mapped back to the domain model.
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Persist a new video with status `Raw` and return the stored record.
    async fn create(&self, video: NewVideo) -> StoreResult<Video>;

    async fn find_by_id(&self, id: VideoId) -> StoreResult<Option<Video>>;

    /// Atomically set the status and advance `updated_at`.
    /// Returns `false` when no video has this id.
    async fn update_status(&self, id: VideoId, status: VideoStatus) -> StoreResult<bool>;

    /// Returns `false` when no video has this id. Frames go with the video.
    async fn delete(&self, id: VideoId) -> StoreResult<bool>;

    /// All videos owned by `user_id`, oldest first. Empty when there are none.
    async fn find_by_user_id(&self, user_id: UserId) -> StoreResult<Vec<Video>>;

    async fn find_frames_by_video_id(&self, video_id: VideoId) -> StoreResult<Vec<Frame>>;

    /// Frames of several videos at once, grouped by video in input order.
    async fn find_frames_by_video_ids(&self, video_ids: &[VideoId]) -> StoreResult<Vec<Frame>> {
        let mut frames = Vec::new();
        for video_id in video_ids {
            frames.extend(self.find_frames_by_video_id(*video_id).await?);
        }
        Ok(frames)
    }

    /// Cheap round trip used by the readiness check.
    async fn health_check(&self) -> StoreResult<()>;
}
