//! # Aerocast Server
//!
//! Broadcast overlay control backend for live aero design competition
//! coverage.
//!
//! ## Overview
//!
//! A control panel mutates one shared overlay state (featured team,
//! panel visibility, custom message) and the team roster behind it; a
//! display client added to the broadcast mix polls the resolved state
//! and renders it. All state is in memory and lives for the process
//! lifetime.
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - A single locked in-memory store for the roster and overlay
//! - A JSON seed file (or embedded demo roster) loaded once at startup
//! - `tower-http` for CORS, request tracing and static UI hosting

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;
pub mod seed;
pub mod store;

pub use infra::app_state::AppState;

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

pub fn create_app(state: AppState) -> Router {
    let versioned_api = routes::create_api_router();

    // Permissive in dev, allow-list in prod. The display client runs as
    // a browser source and may poll from a different origin than the
    // control panel.
    let cors_layer = if state.config.dev_mode {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        let allow_origin = if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let mut app = Router::new()
        .route("/", get(handlers::meta::index_handler))
        .route("/ping", get(handlers::meta::ping_handler))
        .route("/health", get(handlers::meta::health_handler))
        .merge(versioned_api);

    if let Some(root) = &state.config.assets.root {
        for (route, dir) in [
            ("/overlay", root.join("overlay")),
            ("/control-panel", root.join("control-panel")),
        ] {
            if dir.is_dir() {
                info!(route, dir = %dir.display(), "serving static assets");
                app = app.nest_service(route, ServeDir::new(&dir));
            } else {
                info!(route, dir = %dir.display(), "asset directory missing, skipping mount");
            }
        }
    }

    app.layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
