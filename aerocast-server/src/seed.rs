//! Startup roster seeding.
//!
//! The registry is filled exactly once, before the listener binds. A
//! configured seed file that cannot be read or parsed degrades to an
//! empty roster with a warning; seed data never prevents startup.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

use aerocast_model::{FlightResult, FlightStatus, Team};

use crate::store::TeamRegistry;

/// On-disk seed shape: `{"teams": [Team, ...]}`.
#[derive(Debug, Deserialize)]
struct SeedFile {
    teams: Vec<Team>,
}

/// Builds the starting roster from the configured seed file, or from the
/// embedded demo roster when no file is configured.
pub fn seed_registry(seed_path: Option<&Path>) -> TeamRegistry {
    match seed_path {
        Some(path) => match load_seed_file(path) {
            Ok(teams) => {
                info!(path = %path.display(), teams = teams.len(), "roster seed file loaded");
                build_registry(teams)
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %format!("{err:#}"),
                    "failed to load roster seed file, starting with an empty roster"
                );
                TeamRegistry::default()
            }
        },
        None => {
            info!("no seed file configured, using the embedded demo roster");
            build_registry(demo_roster())
        }
    }
}

fn load_seed_file(path: &Path) -> anyhow::Result<Vec<Team>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: SeedFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(parsed.teams)
}

fn build_registry(teams: Vec<Team>) -> TeamRegistry {
    let mut registry = TeamRegistry::default();
    for team in teams {
        let id = team.id.clone();
        if let Err(err) = registry.create(team) {
            warn!(team_id = %id, %err, "skipping seed entry");
        }
    }
    registry
}

/// Roster served out of the box so the overlay and control panel have
/// something to show before an event configures real data.
fn demo_roster() -> Vec<Team> {
    vec![
        Team {
            id: "team001".to_string(),
            name: "AeroTech Racing".to_string(),
            university: "Universidade de São Paulo".to_string(),
            aircraft_photo_url: Some(
                "https://via.placeholder.com/300x200/0066cc/ffffff?text=AeroTech".to_string(),
            ),
            current_battery: 3,
            flight_results: vec![
                FlightResult {
                    battery_number: 1,
                    status: FlightStatus::Validated,
                    score: Some(8.5),
                    notes: Some("Excellent flight".to_string()),
                },
                FlightResult {
                    battery_number: 2,
                    status: FlightStatus::Validated,
                    score: Some(9.2),
                    notes: Some("Perfect landing".to_string()),
                },
                FlightResult {
                    battery_number: 3,
                    status: FlightStatus::Pending,
                    score: None,
                    notes: Some("Currently flying".to_string()),
                },
            ],
        },
        Team {
            id: "team002".to_string(),
            name: "Sky Pioneers".to_string(),
            university: "Instituto Tecnológico de Aeronáutica".to_string(),
            aircraft_photo_url: Some(
                "https://via.placeholder.com/300x200/cc0000/ffffff?text=Sky+Pioneers".to_string(),
            ),
            current_battery: 2,
            flight_results: vec![
                FlightResult {
                    battery_number: 1,
                    status: FlightStatus::Invalidated,
                    score: None,
                    notes: Some("Crashed on takeoff".to_string()),
                },
                FlightResult {
                    battery_number: 2,
                    status: FlightStatus::Validated,
                    score: Some(7.8),
                    notes: Some("Good recovery".to_string()),
                },
            ],
        },
        Team {
            id: "team003".to_string(),
            name: "Falcon Engineering".to_string(),
            university: "Universidade Federal de Minas Gerais".to_string(),
            aircraft_photo_url: Some(
                "https://via.placeholder.com/300x200/00cc66/ffffff?text=Falcon".to_string(),
            ),
            current_battery: 4,
            flight_results: vec![
                FlightResult {
                    battery_number: 1,
                    status: FlightStatus::Validated,
                    score: Some(8.0),
                    notes: Some("Solid performance".to_string()),
                },
                FlightResult {
                    battery_number: 2,
                    status: FlightStatus::Validated,
                    score: Some(8.3),
                    notes: Some("Improving".to_string()),
                },
                FlightResult {
                    battery_number: 3,
                    status: FlightStatus::Validated,
                    score: Some(9.0),
                    notes: Some("Excellent".to_string()),
                },
                FlightResult {
                    battery_number: 4,
                    status: FlightStatus::Pending,
                    score: None,
                    notes: Some("On track now".to_string()),
                },
            ],
        },
    ]
}
