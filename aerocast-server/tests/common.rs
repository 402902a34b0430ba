use std::sync::Arc;

use aerocast_model::Team;
use aerocast_server::{
    AppState, create_app,
    infra::config::Config,
    store::{SyncStore, TeamRegistry},
};
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use serde::Serialize;
use serde_json::Value;

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub fn fixture_team(id: &str) -> Team {
    Team {
        id: id.to_string(),
        name: format!("Team {id}"),
        university: "Test University".to_string(),
        aircraft_photo_url: None,
        current_battery: 1,
        flight_results: Vec::new(),
    }
}

/// Builds the real router over an in-memory store seeded with `teams`.
#[allow(unused)]
pub fn build_test_app(teams: Vec<Team>) -> Router {
    let mut registry = TeamRegistry::default();
    for team in teams {
        registry.create(team).expect("fixture ids must be unique");
    }

    let state = AppState::new(SyncStore::new(registry), Arc::new(Config::default()));
    create_app(state)
}

#[allow(unused)]
pub fn json_request(method: &str, uri: &str, body: &impl Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

#[allow(unused)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(unused)]
pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
