//! Application setup and initialization
//!
//! Everything `main` needs to go from a `Config` to a running router.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::services::{UploadFolders, VideoLifecycleService};
use crate::state::AppState;
use anyhow::{Context, Result};
use mlvt_core::Config;
use mlvt_db::PostgresVideoStore;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.log_format(), config.environment())
        .context("Failed to initialize telemetry")?;

    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;
    let issuer = storage::setup_storage(&config).await?;

    let videos = VideoLifecycleService::new(
        Arc::new(PostgresVideoStore::new(pool)),
        issuer,
        UploadFolders::from_config(config.storage()),
    );
    let state = Arc::new(AppState::new(videos, config.momo().cloned()));
    if state.momo.is_none() {
        tracing::info!("MoMo credentials not set, payment signing disabled");
    }

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
