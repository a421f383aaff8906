use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::VideoId;

/// A frame image extracted from a video by the external frame pipeline.
/// Read-only from this service's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Frame {
    pub id: u64,
    pub video_id: VideoId,
    /// Storage link to the frame image
    pub link: String,
}
