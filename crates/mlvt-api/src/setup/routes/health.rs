//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use std::time::Duration;

const READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Liveness check: the process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness check: the video store answers a ping.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (status_code, store) =
        match tokio::time::timeout(READINESS_TIMEOUT, state.videos.store_ready()).await {
            Ok(Ok(())) => (StatusCode::OK, "ready"),
            Ok(Err(_)) => (StatusCode::SERVICE_UNAVAILABLE, "not_ready"),
            Err(_) => {
                tracing::error!("Store readiness check timed out");
                (StatusCode::SERVICE_UNAVAILABLE, "timeout")
            }
        };

    let status = if status_code == StatusCode::OK {
        "ready"
    } else {
        "not_ready"
    };

    (
        status_code,
        Json(serde_json::json!({ "status": status, "store": store })),
    )
}
