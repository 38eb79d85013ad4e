//! Health and liveness probes.
//!
//! Designed to be called frequently by orchestration systems and load
//! balancers, so they avoid expensive work. With no external dependencies
//! to probe, health reports store occupancy alongside the status.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, instrument};

use crate::server::AppState;

/// Reports service health and store occupancy.
#[instrument(name = "health_check", skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let count = state.store.len().await;

    let body = serde_json::json!({
        "status": "healthy",
        "timestamp": state.clock.now(),
        "version": env!("CARGO_PKG_VERSION"),
        "store": {
            "count": count,
            "capacity": state.store.capacity(),
        },
    });

    debug!(count, "health check completed");

    (StatusCode::OK, Json(body)).into_response()
}

/// Minimal liveness probe: the process is up and serving requests.
#[instrument(name = "liveness_check", skip(state))]
pub async fn liveness_check(State(state): State<AppState>) -> Response {
    let body = serde_json::json!({
        "status": "alive",
        "timestamp": state.clock.now(),
        "service": "hookbox-api",
    });

    (StatusCode::OK, Json(body)).into_response()
}
