//! MLVT API Library
//!
//! HTTP handlers, middleware, the video lifecycle service and application setup.

mod api_doc;
pub mod constants;
mod handlers;
mod middleware;
pub mod services;
pub mod setup;
mod telemetry;
mod utils;

pub mod error;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use middleware::{RequestId, REQUEST_ID_HEADER};
pub use services::{UploadFolders, VideoLifecycleService};
pub use state::AppState;
