//! In-memory video store for tests
//!
//! Mirrors the Postgres semantics: ids start at 1, new records are `Raw`,
//! deleting a video drops its frames.

use async_trait::async_trait;
use chrono::Utc;
use mlvt_core::models::{Frame, NewVideo, UserId, Video, VideoId, VideoStatus};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::store::{StoreError, StoreResult, VideoStore};

#[derive(Default)]
struct MemoryState {
    videos: BTreeMap<VideoId, Video>,
    frames: Vec<Frame>,
    next_video_id: u64,
    next_frame_id: u64,
}

#[derive(Clone, Default)]
pub struct MemoryVideoStore {
    state: Arc<Mutex<MemoryState>>,
    failing: Arc<AtomicBool>,
}

impl MemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with `StoreError::Backend`
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Attach a frame to a video, as the frame pipeline would.
    pub fn add_frame(&self, video_id: VideoId, link: impl Into<String>) -> Frame {
        let mut state = self.state.lock().unwrap();
        state.next_frame_id += 1;
        let frame = Frame {
            id: state.next_frame_id,
            video_id,
            link: link.into(),
        };
        state.frames.push(frame.clone());
        frame
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Backend(
                "memory store configured to fail".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn create(&self, video: NewVideo) -> StoreResult<Video> {
        self.check_available()?;
        if i64::try_from(video.user_id).is_err() {
            return Err(StoreError::IdOutOfRange(video.user_id));
        }

        let mut state = self.state.lock().unwrap();
        state.next_video_id += 1;
        let now = Utc::now();
        let stored = Video {
            id: state.next_video_id,
            title: video.title,
            duration: video.duration,
            description: video.description,
            file_name: video.file_name,
            folder: video.folder,
            image: video.image,
            status: VideoStatus::Raw,
            user_id: video.user_id,
            created_at: now,
            updated_at: now,
        };
        state.videos.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: VideoId) -> StoreResult<Option<Video>> {
        self.check_available()?;
        Ok(self.state.lock().unwrap().videos.get(&id).cloned())
    }

    async fn update_status(&self, id: VideoId, status: VideoStatus) -> StoreResult<bool> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        match state.videos.get_mut(&id) {
            Some(video) => {
                video.status = status;
                video.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: VideoId) -> StoreResult<bool> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        let removed = state.videos.remove(&id).is_some();
        if removed {
            state.frames.retain(|frame| frame.video_id != id);
        }
        Ok(removed)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> StoreResult<Vec<Video>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .videos
            .values()
            .filter(|video| video.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_frames_by_video_id(&self, video_id: VideoId) -> StoreResult<Vec<Frame>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .frames
            .iter()
            .filter(|frame| frame.video_id == video_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.check_available()
    }
}
