use aerocast_model::{OverlayState, ResolvedOverlay};

use super::teams::{RegistryError, TeamRegistry};

/// The overlay singleton plus its read-time resolution.
///
/// Visibility is a two-state machine (shown/hidden) driven by
/// [`show`](Self::show), [`hide`](Self::hide) and
/// [`toggle`](Self::toggle); it starts hidden and flips for the life of
/// the process.
#[derive(Debug, Default)]
pub struct OverlayStore {
    state: OverlayState,
}

impl OverlayStore {
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// The state as the display client consumes it: the current team
    /// reference is looked up in the roster on every call, never cached,
    /// so roster mutations are visible on the next poll. A dangling or
    /// unset reference yields `team: None` rather than an error.
    pub fn resolve(&self, registry: &TeamRegistry) -> ResolvedOverlay {
        let team = self
            .state
            .current_team_id
            .as_deref()
            .and_then(|id| registry.get(id).ok())
            .cloned();

        ResolvedOverlay {
            visible: self.state.visible,
            show_team_info: self.state.show_team_info,
            show_flight_results: self.state.show_flight_results,
            show_current_battery: self.state.show_current_battery,
            custom_message: self.state.custom_message.clone(),
            team,
        }
    }

    /// Wholesale overwrite of every field. There is no partial patch at
    /// this layer; callers wanting to change one field read-modify-write
    /// the whole record and accept last-write-wins.
    pub fn replace(&mut self, next: OverlayState) -> &OverlayState {
        self.state = next;
        &self.state
    }

    /// Turns the overlay on. With a team id, the id must exist in the
    /// roster and becomes the current reference; without one, only
    /// visibility changes. A rejected id leaves the state untouched,
    /// including visibility.
    pub fn show(
        &mut self,
        team_id: Option<&str>,
        registry: &TeamRegistry,
    ) -> Result<(), RegistryError> {
        if let Some(id) = team_id {
            if !registry.contains(id) {
                return Err(RegistryError::NotFound(id.to_string()));
            }
            self.state.current_team_id = Some(id.to_string());
        }
        self.state.visible = true;
        Ok(())
    }

    /// Turns the overlay off. The current team reference is kept so a
    /// later show restores the same team.
    pub fn hide(&mut self) {
        self.state.visible = false;
    }

    /// Flips visibility, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.state.visible = !self.state.visible;
        self.state.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerocast_model::Team;

    fn registry_with(ids: &[&str]) -> TeamRegistry {
        let mut registry = TeamRegistry::default();
        for id in ids {
            registry
                .create(Team {
                    id: id.to_string(),
                    name: format!("Team {id}"),
                    university: "Test University".to_string(),
                    aircraft_photo_url: None,
                    current_battery: 1,
                    flight_results: Vec::new(),
                })
                .unwrap();
        }
        registry
    }

    #[test]
    fn show_with_team_sets_reference_and_visibility() {
        let registry = registry_with(&["t1"]);
        let mut overlay = OverlayStore::default();

        overlay.show(Some("t1"), &registry).unwrap();
        assert!(overlay.state().visible);
        assert_eq!(overlay.state().current_team_id.as_deref(), Some("t1"));
    }

    #[test]
    fn show_with_unknown_team_changes_nothing() {
        let registry = registry_with(&["t1"]);
        let mut overlay = OverlayStore::default();

        let err = overlay.show(Some("ghost"), &registry).unwrap_err();
        assert_eq!(err, RegistryError::NotFound("ghost".to_string()));
        assert!(!overlay.state().visible);
        assert!(overlay.state().current_team_id.is_none());
    }

    #[test]
    fn show_without_team_keeps_existing_reference() {
        let registry = registry_with(&["t1"]);
        let mut overlay = OverlayStore::default();
        overlay.show(Some("t1"), &registry).unwrap();
        overlay.hide();

        overlay.show(None, &registry).unwrap();
        assert!(overlay.state().visible);
        assert_eq!(overlay.state().current_team_id.as_deref(), Some("t1"));
    }

    #[test]
    fn hide_preserves_the_team_reference() {
        let registry = registry_with(&["t1"]);
        let mut overlay = OverlayStore::default();
        overlay.show(Some("t1"), &registry).unwrap();

        overlay.hide();
        assert!(!overlay.state().visible);
        assert_eq!(overlay.state().current_team_id.as_deref(), Some("t1"));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut overlay = OverlayStore::default();
        let initial = overlay.state().visible;

        assert_eq!(overlay.toggle(), !initial);
        assert_eq!(overlay.toggle(), initial);
    }

    #[test]
    fn resolve_embeds_a_current_snapshot() {
        let mut registry = registry_with(&["t1"]);
        let mut overlay = OverlayStore::default();
        overlay.show(Some("t1"), &registry).unwrap();

        registry.set_current_battery("t1", 3).unwrap();

        let resolved = overlay.resolve(&registry);
        assert_eq!(resolved.team.unwrap().current_battery, 3);
    }

    #[test]
    fn resolve_tolerates_a_dangling_reference() {
        let mut registry = registry_with(&["t1"]);
        let mut overlay = OverlayStore::default();
        overlay.show(Some("t1"), &registry).unwrap();

        registry.delete("t1").unwrap();

        let resolved = overlay.resolve(&registry);
        assert!(resolved.visible);
        assert!(resolved.team.is_none());
    }

    #[test]
    fn replace_overwrites_every_field() {
        let mut overlay = OverlayStore::default();
        overlay.replace(OverlayState {
            visible: true,
            current_team_id: Some("t1".to_string()),
            show_team_info: false,
            show_flight_results: false,
            show_current_battery: false,
            custom_message: Some("Weather hold".to_string()),
        });

        let state = overlay.state();
        assert!(state.visible);
        assert!(!state.show_team_info);
        assert_eq!(state.custom_message.as_deref(), Some("Weather hold"));
    }
}
