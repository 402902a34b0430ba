//! Overlay state endpoints: the resolved read polled by the display
//! client, and the show/hide/toggle/replace mutations issued by the
//! control panel.

use aerocast_model::{OverlayState, ResolvedOverlay};
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::{AppState, errors::AppResult, store::SyncStore};

/// Current overlay state with the referenced team resolved inline.
///
/// This is the display client's only operation. It never fails: a
/// dangling team reference comes back as `team: null`. Repeated calls
/// with no intervening mutation return identical state.
pub async fn get_overlay_state_handler(State(state): State<AppState>) -> Json<ResolvedOverlay> {
    let store = state.store.read().await;
    Json(store.overlay.resolve(&store.teams))
}

/// Wholesale replace of the overlay singleton. Omitted body fields take
/// their defaults; there is no partial patch, and concurrent writers are
/// last-write-wins.
pub async fn replace_overlay_state_handler(
    State(state): State<AppState>,
    Json(next): Json<OverlayState>,
) -> Json<Value> {
    let mut store = state.store.write().await;
    let current = store.overlay.replace(next);
    info!(
        visible = current.visible,
        team_id = current.current_team_id.as_deref(),
        "overlay state replaced"
    );
    Json(json!({ "status": "success", "state": current }))
}

#[derive(Debug, Deserialize)]
pub struct ShowParams {
    pub team_id: Option<String>,
}

pub async fn show_overlay_handler(
    State(state): State<AppState>,
    Query(params): Query<ShowParams>,
) -> AppResult<Json<Value>> {
    let mut store = state.store.write().await;
    let SyncStore { teams, overlay } = &mut *store;
    overlay.show(params.team_id.as_deref(), teams)?;
    info!(team_id = params.team_id.as_deref(), "overlay shown");
    Ok(Json(json!({
        "status": "success",
        "visible": true,
        "team_id": params.team_id,
    })))
}

pub async fn hide_overlay_handler(State(state): State<AppState>) -> Json<Value> {
    let mut store = state.store.write().await;
    store.overlay.hide();
    info!("overlay hidden");
    Json(json!({ "status": "success", "visible": false }))
}

pub async fn toggle_overlay_handler(State(state): State<AppState>) -> Json<Value> {
    let mut store = state.store.write().await;
    let visible = store.overlay.toggle();
    info!(visible, "overlay toggled");
    Json(json!({ "status": "success", "visible": visible }))
}
