//! Service metadata endpoints: index, liveness and health.

use axum::{extract::State, response::Json};
use serde_json::{Value, json};
use tracing::info;

use crate::AppState;

/// Service index with the notable paths, for anyone poking the root.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Aerocast Overlay API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "overlay_state": "/api/v1/overlay/state",
            "teams": "/api/v1/teams",
            "control_panel": "/control-panel/index.html",
            "overlay_view": "/overlay/index.html",
        }
    }))
}

pub async fn ping_handler() -> Json<Value> {
    info!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "Aerocast overlay server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health summary. State is memory-resident so the checks report counts
/// rather than connectivity.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.read().await;

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "registry": {
                "status": "healthy",
                "team_count": store.teams.len(),
            },
            "overlay": {
                "status": "healthy",
                "visible": store.overlay.state().visible,
            },
        }
    }))
}
