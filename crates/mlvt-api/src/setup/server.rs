//! Listener binding and shutdown handling

use anyhow::Result;
use axum::Router;
use mlvt_core::config::PRESIGN_EXPIRY_SECS;
use mlvt_core::Config;

/// Bind the configured port and serve `app` until a stop signal arrives.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        addr = %addr,
        environment = %config.environment(),
        url_expiry_secs = PRESIGN_EXPIRY_SECS,
        payments_enabled = config.momo().is_some(),
        "Video service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_stop())
        .await?;

    tracing::info!("Video service stopped");
    Ok(())
}

/// In-flight requests are drained once this future completes. An interrupt
/// from the terminal or a container stop both count.
async fn wait_for_stop() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for interrupt");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let stop = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let stop = std::future::pending::<()>();

    let source = tokio::select! {
        _ = interrupt => "interrupt",
        _ = stop => "sigterm",
    };
    tracing::info!(signal = source, "Draining connections before exit");
}
