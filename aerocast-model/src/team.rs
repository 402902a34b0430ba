use serde::{Deserialize, Serialize};

/// Judged outcome of a single battery (one timed flight attempt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Validated,
    Invalidated,
    Pending,
    NotFlown,
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlightStatus::Validated => write!(f, "validated"),
            FlightStatus::Invalidated => write!(f, "invalidated"),
            FlightStatus::Pending => write!(f, "pending"),
            FlightStatus::NotFlown => write!(f, "not_flown"),
        }
    }
}

/// One recorded flight attempt.
///
/// Results are append-only: once logged against a team they are never
/// edited or removed individually. Battery numbers may repeat (a re-flown
/// attempt keeps both entries); insertion order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightResult {
    pub battery_number: u32,
    pub status: FlightStatus,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A competing team and its flight history.
///
/// `id` is the stable identity: unique across the roster and immutable
/// after creation. Every other field may change between display polls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub university: String,
    #[serde(default)]
    pub aircraft_photo_url: Option<String>,
    pub current_battery: u32,
    #[serde(default)]
    pub flight_results: Vec<FlightResult>,
}
