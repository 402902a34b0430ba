use aerocast_model::{FlightResult, Team};
use thiserror::Error;

/// Failures surfaced by roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("team not found: {0}")]
    NotFound(String),
    #[error("team already exists: {0}")]
    AlreadyExists(String),
}

/// Ordered roster of competing teams.
///
/// Iteration order is seeding/creation order and stays stable across
/// mutations. Lookups are linear: the roster holds a few dozen entries
/// at most during an event.
#[derive(Debug, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Full roster in registry order.
    pub fn list(&self) -> &[Team] {
        &self.teams
    }

    pub fn get(&self, id: &str) -> Result<&Team, RegistryError> {
        self.position(id)
            .map(|index| &self.teams[index])
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Inserts a new team at the end of the roster.
    pub fn create(&mut self, team: Team) -> Result<&Team, RegistryError> {
        if self.contains(&team.id) {
            return Err(RegistryError::AlreadyExists(team.id));
        }
        self.teams.push(team);
        let index = self.teams.len() - 1;
        Ok(&self.teams[index])
    }

    /// Overwrites every mutable field of the stored record, including the
    /// whole flight-result sequence. This is a full replace, not a merge:
    /// results appended between a caller's read and its replace are lost.
    /// That read-modify-write race is the caller's responsibility.
    ///
    /// The stored id stays the looked-up id; a differing id in `team`
    /// does not rename the record.
    pub fn replace(&mut self, id: &str, team: Team) -> Result<&Team, RegistryError> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        let stored = &mut self.teams[index];
        stored.name = team.name;
        stored.university = team.university;
        stored.aircraft_photo_url = team.aircraft_photo_url;
        stored.current_battery = team.current_battery;
        stored.flight_results = team.flight_results;
        Ok(&self.teams[index])
    }

    /// Removes the team. A dangling overlay reference to this id is left
    /// in place; resolution degrades it to "no team attached".
    pub fn delete(&mut self, id: &str) -> Result<(), RegistryError> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        self.teams.remove(index);
        Ok(())
    }

    /// Appends a flight result to the team's log, preserving prior
    /// entries. Battery numbers are not checked for uniqueness.
    pub fn append_result(
        &mut self,
        id: &str,
        result: FlightResult,
    ) -> Result<&Team, RegistryError> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        self.teams[index].flight_results.push(result);
        Ok(&self.teams[index])
    }

    /// Overwrites `current_battery`. Not bounds-checked against the
    /// flight-result log.
    pub fn set_current_battery(
        &mut self,
        id: &str,
        battery_number: u32,
    ) -> Result<&Team, RegistryError> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        self.teams[index].current_battery = battery_number;
        Ok(&self.teams[index])
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.teams.iter().position(|team| team.id == id)
    }
}
