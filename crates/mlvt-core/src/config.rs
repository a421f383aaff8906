//! Configuration module
//!
//! Configuration is read once from the environment at startup and passed
//! explicitly to the components that need it.

use std::env;

// Common constants
const SERVER_PORT: u16 = 8080;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
/// Lifetime of every presigned URL. Fixed, not configurable.
pub const PRESIGN_EXPIRY_SECS: u64 = 15 * 60;
const VIDEOS_FOLDER: &str = "videos";
const VIDEO_FRAMES_FOLDER: &str = "frames";

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub http_concurrency_limit: usize,
    pub max_request_body_bytes: usize,
    pub environment: String,
    pub log_format: String,
}

/// Object storage settings for the URL issuer
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...)
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Folder for video uploads
    pub video_folder: String,
    /// Folder for thumbnail / frame image uploads
    pub image_folder: String,
}

impl StorageConfig {
    /// Static credentials are used only when both halves are present.
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some((id.as_str(), secret.as_str()))
            }
            _ => None,
        }
    }
}

/// MoMo payment signing settings
#[derive(Clone, Debug)]
pub struct MomoConfig {
    pub partner_code: String,
    pub access_key: String,
    pub secret_key: String,
}

#[derive(Clone, Debug)]
pub struct VideoServiceConfig {
    pub base: BaseConfig,
    pub database_url: String,
    pub storage: StorageConfig,
    pub momo: Option<MomoConfig>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<VideoServiceConfig>);

impl Config {
    fn inner(&self) -> &VideoServiceConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_name(&self.inner().base.environment)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = VideoServiceConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.inner().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.inner().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.inner().base.environment
    }

    pub fn log_format(&self) -> &str {
        &self.inner().base.log_format
    }

    pub fn db_max_connections(&self) -> u32 {
        self.inner().base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.inner().base.db_timeout_seconds
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.inner().base.http_concurrency_limit
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.inner().base.max_request_body_bytes
    }

    pub fn database_url(&self) -> &str {
        &self.inner().database_url
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.inner().storage
    }

    pub fn momo(&self) -> Option<&MomoConfig> {
        self.inner().momo.as_ref()
    }
}

/// Split a comma-separated origin list. A wildcard anywhere in the list is
/// refused for production environments.
fn parse_cors_origins(raw: &str, environment: &str) -> Result<Vec<String>, anyhow::Error> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if is_production_name(environment) && origins.iter().any(|o| o == "*") {
        return Err(anyhow::anyhow!(
            "CORS_ORIGINS cannot contain '*' in production. Please specify explicit origins."
        ));
    }
    Ok(origins)
}

fn is_production_name(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl VideoServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = parse_cors_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            &environment,
        )?;

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            http_concurrency_limit: env::var("HTTP_CONCURRENCY_LIMIT")
                .unwrap_or_else(|_| HTTP_CONCURRENCY_LIMIT.to_string())
                .parse()
                .unwrap_or(HTTP_CONCURRENCY_LIMIT),
            max_request_body_bytes: env::var("MAX_REQUEST_BODY_BYTES")
                .unwrap_or_else(|_| MAX_REQUEST_BODY_BYTES.to_string())
                .parse()
                .unwrap_or(MAX_REQUEST_BODY_BYTES),
            environment,
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        };

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let storage = StorageConfig {
            bucket: env::var("AWS_BUCKET")
                .or_else(|_| env::var("S3_BUCKET"))
                .map_err(|_| anyhow::anyhow!("AWS_BUCKET must be set"))?,
            region: env::var("AWS_REGION")
                .or_else(|_| env::var("S3_REGION"))
                .map_err(|_| anyhow::anyhow!("AWS_REGION must be set"))?,
            endpoint: non_empty_var("S3_ENDPOINT"),
            access_key_id: non_empty_var("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY"),
            video_folder: env::var("VIDEOS_FOLDER").unwrap_or_else(|_| VIDEOS_FOLDER.to_string()),
            image_folder: env::var("VIDEO_FRAMES_FOLDER")
                .unwrap_or_else(|_| VIDEO_FRAMES_FOLDER.to_string()),
        };

        let momo = match (
            non_empty_var("MOMO_PARTNER_CODE"),
            non_empty_var("MOMO_ACCESS_KEY"),
            non_empty_var("MOMO_SECRET_KEY"),
        ) {
            (Some(partner_code), Some(access_key), Some(secret_key)) => Some(MomoConfig {
                partner_code,
                access_key,
                secret_key,
            }),
            _ => None,
        };

        let config = VideoServiceConfig {
            base,
            database_url,
            storage,
            momo,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.database_url.starts_with("postgres://")
            && !self.database_url.starts_with("postgresql://")
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.storage.bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("AWS_BUCKET must not be empty"));
        }

        if self.storage.region.trim().is_empty() {
            return Err(anyhow::anyhow!("AWS_REGION must not be empty"));
        }

        if self.storage.access_key_id.is_some() != self.storage.secret_access_key.is_some() {
            return Err(anyhow::anyhow!(
                "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set together"
            ));
        }

        if self.storage.video_folder.contains("..") || self.storage.image_folder.contains("..") {
            return Err(anyhow::anyhow!(
                "VIDEOS_FOLDER and VIDEO_FRAMES_FOLDER must not contain '..'"
            ));
        }

        Ok(())
    }
}
