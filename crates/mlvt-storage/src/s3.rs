use crate::keys::object_key;
use crate::traits::{BlobUrlIssuer, StorageError, StorageResult, UrlOperation};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use mlvt_core::config::PRESIGN_EXPIRY_SECS;
use mlvt_core::StorageConfig;
use std::time::Duration;

/// Presigns S3 requests locally; no network round trip per URL.
#[derive(Clone)]
pub struct S3UrlIssuer {
    client: Client,
    bucket: String,
    expires_in: Duration,
}

impl S3UrlIssuer {
    /// Create a new issuer from storage configuration
    ///
    /// Static credentials are used when both `AWS_ACCESS_KEY_ID` and
    /// `AWS_SECRET_ACCESS_KEY` are configured; otherwise the default AWS
    /// provider chain (env, profile, instance role) is used.
    ///
    /// A custom endpoint switches to path-style addressing, which MinIO and
    /// most S3-compatible providers require.
    pub async fn new(config: &StorageConfig) -> StorageResult<Self> {
        if config.bucket.trim().is_empty() {
            return Err(StorageError::ConfigError(
                "bucket must not be empty".to_string(),
            ));
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some((access_key_id, secret_access_key)) = config.static_credentials() {
            loader = loader.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                "mlvt-static",
            ));
        }

        let shared_config = loader.load().await;

        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if let Some(ref endpoint) = config.endpoint {
            s3_config_builder = s3_config_builder
                .endpoint_url(endpoint)
                .force_path_style(true);
        }
        let client = Client::from_conf(s3_config_builder.build());

        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            endpoint = ?config.endpoint,
            static_credentials = config.static_credentials().is_some(),
            expires_in_secs = PRESIGN_EXPIRY_SECS,
            "S3 URL issuer initialized"
        );

        Ok(Self::from_client(
            client,
            config.bucket.clone(),
            Duration::from_secs(PRESIGN_EXPIRY_SECS),
        ))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client, bucket: String, expires_in: Duration) -> Self {
        Self {
            client,
            bucket,
            expires_in,
        }
    }

    fn presigning_config(&self) -> StorageResult<PresigningConfig> {
        PresigningConfig::builder()
            .expires_in(self.expires_in)
            .build()
            .map_err(|e| StorageError::SigningFailed(e.to_string()))
    }
}

#[async_trait]
impl BlobUrlIssuer for S3UrlIssuer {
    #[tracing::instrument(skip(self), fields(bucket = %self.bucket))]
    async fn generate_presigned_url(
        &self,
        operation: UrlOperation,
        folder: &str,
        file_name: &str,
        file_type: &str,
    ) -> StorageResult<String> {
        let key = object_key(folder, file_name)?;
        let presigning_config = self.presigning_config()?;

        let signing_failed = |e: String| {
            tracing::error!(error = %e, key = %key, %operation, "S3 presigning failed");
            StorageError::SigningFailed(e)
        };

        let presigned = match operation {
            UrlOperation::Upload => self
                .client
                .put_object()
                .bucket(&self.bucket)
                .key(&key)
                .content_type(file_type)
                .presigned(presigning_config)
                .await
                .map_err(|e| signing_failed(e.to_string()))?,
            UrlOperation::Download => {
                let mut request = self.client.get_object().bucket(&self.bucket).key(&key);
                if !file_type.is_empty() {
                    request = request.response_content_type(file_type);
                }
                request
                    .presigned(presigning_config)
                    .await
                    .map_err(|e| signing_failed(e.to_string()))?
            }
        };

        tracing::debug!(key = %key, "Presigned URL issued");
        Ok(presigned.uri().to_string())
    }

    fn expires_in(&self) -> Duration {
        self.expires_in
    }
}
