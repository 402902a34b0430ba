//! Roster endpoints: team CRUD plus the per-team flight-result log and
//! current-battery updates.

use aerocast_model::{FlightResult, Team};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::{AppState, errors::AppResult};

pub async fn list_teams_handler(State(state): State<AppState>) -> Json<Vec<Team>> {
    let store = state.store.read().await;
    Json(store.teams.list().to_vec())
}

pub async fn get_team_handler(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> AppResult<Json<Team>> {
    let store = state.store.read().await;
    Ok(Json(store.teams.get(&team_id)?.clone()))
}

pub async fn create_team_handler(
    State(state): State<AppState>,
    Json(team): Json<Team>,
) -> AppResult<Json<Value>> {
    let mut store = state.store.write().await;
    let team = store.teams.create(team)?.clone();
    info!(team_id = %team.id, name = %team.name, "team created");
    Ok(Json(json!({ "status": "success", "team": team })))
}

/// Full replace of a stored team. Results appended between a caller's
/// read and this write are dropped with the rest of the old record;
/// that race belongs to the caller.
pub async fn replace_team_handler(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(team): Json<Team>,
) -> AppResult<Json<Value>> {
    let mut store = state.store.write().await;
    let team = store.teams.replace(&team_id, team)?.clone();
    info!(team_id = %team.id, "team replaced");
    Ok(Json(json!({ "status": "success", "team": team })))
}

pub async fn delete_team_handler(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> AppResult<Json<Value>> {
    let mut store = state.store.write().await;
    store.teams.delete(&team_id)?;
    info!(team_id = %team_id, "team deleted");
    Ok(Json(json!({
        "status": "success",
        "message": format!("Team {team_id} deleted"),
    })))
}

pub async fn append_result_handler(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(result): Json<FlightResult>,
) -> AppResult<Json<Value>> {
    let mut store = state.store.write().await;
    let team = store.teams.append_result(&team_id, result)?.clone();
    info!(
        team_id = %team.id,
        results = team.flight_results.len(),
        "flight result appended"
    );
    Ok(Json(json!({ "status": "success", "team": team })))
}

#[derive(Debug, Deserialize)]
pub struct BatteryParams {
    pub battery_number: u32,
}

pub async fn set_current_battery_handler(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Query(params): Query<BatteryParams>,
) -> AppResult<Json<Value>> {
    let mut store = state.store.write().await;
    let team = store
        .teams
        .set_current_battery(&team_id, params.battery_number)?
        .clone();
    info!(
        team_id = %team.id,
        battery_number = params.battery_number,
        "current battery updated"
    );
    Ok(Json(json!({ "status": "success", "team": team })))
}
