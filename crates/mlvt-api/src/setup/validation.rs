//! Configuration validation
//!
//! Startup checks on pool settings that parsing accepts but that would only
//! fail later at runtime. Production CORS rules live in `Config::from_env`.

use anyhow::Result;
use mlvt_core::Config;

pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if config.db_max_connections() > 100 {
        tracing::warn!(
            max_connections = config.db_max_connections(),
            "Database max connections is very high"
        );
    }

    Ok(())
}
