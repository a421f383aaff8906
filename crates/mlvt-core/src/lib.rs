//! MLVT Core Library
//!
//! This crate provides the domain models, error taxonomy, configuration and the
//! payment signature helper shared by the store, storage and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod payment;

// Re-export commonly used types
pub use config::{BaseConfig, Config, MomoConfig, StorageConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{Frame, NewVideo, UploadKind, UserId, Video, VideoId, VideoStatus};
pub use payment::MomoPaymentRequest;
