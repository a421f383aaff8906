//! URL issuer setup

use anyhow::{Context, Result};
use mlvt_core::Config;
use mlvt_storage::{create_url_issuer, BlobUrlIssuer};
use std::sync::Arc;

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn BlobUrlIssuer>> {
    let issuer = create_url_issuer(config)
        .await
        .context("Failed to initialize URL issuer")?;

    tracing::info!(
        video_folder = %config.storage().video_folder,
        image_folder = %config.storage().image_folder,
        "Upload folders configured"
    );

    Ok(issuer)
}
