//! API constants
//!
//! Every REST route is nested under `API_PREFIX`. Handler path annotations
//! for the OpenAPI document use the same literal prefix.

/// API base path prefix (version-independent)
pub const API_BASE: &str = "/api";

/// Current API version segment
pub const API_VERSION: &str = "v1";

/// Versioned prefix for all REST routes
pub const API_PREFIX: &str = "/api/v1";

/// Where the generated OpenAPI document is served
pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";

/// Client-facing error messages. Fixed literals; causes are logged, not returned.
pub mod messages {
    pub const INVALID_VIDEO_ID: &str = "invalid video ID";
    pub const INVALID_USER_ID: &str = "invalid user ID";
    pub const INVALID_INPUT: &str = "invalid input";
    pub const VIDEO_NOT_FOUND: &str = "video not found";
    pub const IMAGE_NOT_FOUND: &str = "image not found";

    pub const STATUS_UPDATED: &str = "status updated successfully";
    pub const VIDEO_ADDED: &str = "Video added successfully";
    pub const VIDEO_DELETED: &str = "Video deleted successfully";
}
