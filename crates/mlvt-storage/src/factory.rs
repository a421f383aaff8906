#[cfg(feature = "storage-s3")]
use crate::S3UrlIssuer;
use crate::{BlobUrlIssuer, StorageResult};
use mlvt_core::Config;
use std::sync::Arc;

/// Create the URL issuer for the configured object store
#[cfg(feature = "storage-s3")]
pub async fn create_url_issuer(config: &Config) -> StorageResult<Arc<dyn BlobUrlIssuer>> {
    let issuer = S3UrlIssuer::new(config.storage()).await?;
    Ok(Arc::new(issuer))
}

#[cfg(not(feature = "storage-s3"))]
pub async fn create_url_issuer(_config: &Config) -> StorageResult<Arc<dyn BlobUrlIssuer>> {
    Err(crate::StorageError::ConfigError(
        "S3 URL issuer not available (storage-s3 feature not enabled)".to_string(),
    ))
}
