//! URL issuer abstraction
//!
//! `BlobUrlIssuer` is the seam between the lifecycle service and the object
//! storage provider. Production uses `S3UrlIssuer`; tests use a static fake.

use async_trait::async_trait;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Empty file name or a key that would escape its folder.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Presigning failed: {0}")]
    SigningFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// HTTP operation a presigned URL authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlOperation {
    /// Single PUT of an object with a fixed content type
    Upload,
    /// GET of an existing object
    Download,
}

impl Display for UrlOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UrlOperation::Upload => write!(f, "upload"),
            UrlOperation::Download => write!(f, "download"),
        }
    }
}

/// Issues presigned object URLs.
///
/// Implementations never retry: a signing failure is returned as-is and the
/// caller classifies it.
#[async_trait]
pub trait BlobUrlIssuer: Send + Sync {
    /// Build a URL for `operation` on the object at `folder/file_name`.
    ///
    /// `file_type` is bound as the content type of uploads and, when
    /// non-empty, as the response content type of downloads. An empty
    /// `file_name` is `StorageError::InvalidKey`.
    async fn generate_presigned_url(
        &self,
        operation: UrlOperation,
        folder: &str,
        file_name: &str,
        file_type: &str,
    ) -> StorageResult<String>;

    /// How long issued URLs stay valid.
    fn expires_in(&self) -> Duration;
}
