//! Health check endpoint

use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" when the backend answers, "degraded" otherwise
    pub status: String,
    /// Service version
    pub version: String,
    /// Backend reachability
    pub backend: BackendHealth,
}

/// Backend reachability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendHealth {
    /// Whether the backend health endpoint answered successfully
    pub reachable: bool,
    /// Failure reason when unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report service health and whether the backend is reachable
///
/// Always answers 200; an unreachable backend only degrades the status.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let start_time = std::time::Instant::now();

    let backend = match state.api_client.health().await {
        Ok(_) => BackendHealth {
            reachable: true,
            error: None,
        },
        Err(e) => {
            warn!("Backend health check failed: {e}");
            BackendHealth {
                reachable: false,
                error: Some(e.to_string()),
            }
        }
    };

    let status = if backend.reachable { "healthy" } else { "degraded" };
    info!(status, elapsed = ?start_time.elapsed(), "Health check completed");

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend,
    })
}
