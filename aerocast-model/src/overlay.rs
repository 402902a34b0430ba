use serde::{Deserialize, Serialize};

use crate::team::Team;

/// What the display client should currently render.
///
/// This is a process-wide singleton, wholesale-replaced or mutated
/// through the sync API. `current_team_id` is a weak reference: the team
/// it names may be deleted afterwards, and readers must degrade a
/// dangling id to "no team attached" rather than fail. Resolution
/// happens at read time, see [`ResolvedOverlay`].
///
/// Request bodies may omit any field; omitted fields take the same
/// defaults the overlay starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayState {
    pub visible: bool,
    pub current_team_id: Option<String>,
    pub show_team_info: bool,
    pub show_flight_results: bool,
    pub show_current_battery: bool,
    pub custom_message: Option<String>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            visible: false,
            current_team_id: None,
            show_team_info: true,
            show_flight_results: true,
            show_current_battery: true,
            custom_message: None,
        }
    }
}

/// Overlay state merged with a snapshot of the referenced team, as
/// served to the polling display client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOverlay {
    pub visible: bool,
    pub show_team_info: bool,
    pub show_flight_results: bool,
    pub show_current_battery: bool,
    pub custom_message: Option<String>,
    pub team: Option<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_starts_hidden_with_panels_shown() {
        let state = OverlayState::default();
        assert!(!state.visible);
        assert!(state.current_team_id.is_none());
        assert!(state.show_team_info);
        assert!(state.show_flight_results);
        assert!(state.show_current_battery);
        assert!(state.custom_message.is_none());
    }

    #[test]
    fn partial_body_fills_remaining_fields_with_defaults() {
        let state: OverlayState = serde_json::from_str(r#"{"visible":true}"#).unwrap();
        assert!(state.visible);
        assert!(state.show_team_info);
        assert!(state.current_team_id.is_none());
    }
}
