//! Application state shared by all handlers.

use mlvt_core::MomoConfig;

use crate::services::VideoLifecycleService;

#[derive(Clone)]
pub struct AppState {
    pub videos: VideoLifecycleService,
    /// Present only when all MoMo credentials are configured
    pub momo: Option<MomoConfig>,
}

impl AppState {
    pub fn new(videos: VideoLifecycleService, momo: Option<MomoConfig>) -> Self {
        Self { videos, momo }
    }
}
