//! Deterministic issuer for tests
//!
//! Builds fake URLs under a fixed base without signing anything, records
//! every call, and can be switched into a failing mode.

use crate::keys::object_key;
use crate::traits::{BlobUrlIssuer, StorageError, StorageResult, UrlOperation};
use async_trait::async_trait;
use mlvt_core::config::PRESIGN_EXPIRY_SECS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded call to the issuer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedUrl {
    pub operation: UrlOperation,
    pub folder: String,
    pub file_name: String,
    pub file_type: String,
}

#[derive(Clone)]
pub struct StaticUrlIssuer {
    base_url: String,
    expires_in: Duration,
    failing: Arc<AtomicBool>,
    calls: Arc<Mutex<Vec<IssuedUrl>>>,
}

impl StaticUrlIssuer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            expires_in: Duration::from_secs(PRESIGN_EXPIRY_SECS),
            failing: Arc::new(AtomicBool::new(false)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every following call fail with `SigningFailed`
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<IssuedUrl> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for StaticUrlIssuer {
    fn default() -> Self {
        Self::new("https://blobs.test")
    }
}

#[async_trait]
impl BlobUrlIssuer for StaticUrlIssuer {
    async fn generate_presigned_url(
        &self,
        operation: UrlOperation,
        folder: &str,
        file_name: &str,
        file_type: &str,
    ) -> StorageResult<String> {
        self.calls.lock().unwrap().push(IssuedUrl {
            operation,
            folder: folder.to_string(),
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
        });

        let key = object_key(folder, file_name)?;
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::SigningFailed(
                "static issuer configured to fail".to_string(),
            ));
        }

        let method = match operation {
            UrlOperation::Upload => "PUT",
            UrlOperation::Download => "GET",
        };
        Ok(format!(
            "{}/{}?method={}&expires={}",
            self.base_url.trim_end_matches('/'),
            key,
            method,
            self.expires_in.as_secs()
        ))
    }

    fn expires_in(&self) -> Duration {
        self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_urls() {
        let issuer = StaticUrlIssuer::default();
        let url = issuer
            .generate_presigned_url(UrlOperation::Upload, "folder", "name.ext", "type")
            .await
            .unwrap();
        assert_eq!(
            url,
            "https://blobs.test/folder/name.ext?method=PUT&expires=900"
        );
        assert_eq!(issuer.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let issuer = StaticUrlIssuer::default();
        issuer.set_failing(true);
        let err = issuer
            .generate_presigned_url(UrlOperation::Download, "v", "a.mp4", "")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::SigningFailed(_)));
    }
}
