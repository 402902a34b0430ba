//! In-memory stores behind the sync API.
//!
//! All mutable service state lives here: the team roster and the overlay
//! singleton. One lock guards both (see
//! [`AppState`](crate::infra::app_state::AppState)) so every API
//! operation applies atomically with respect to concurrent callers.
//! Nothing is persisted; a restart starts from the seed source.

pub mod overlay;
pub mod teams;

pub use overlay::OverlayStore;
pub use teams::{RegistryError, TeamRegistry};

/// The roster plus the overlay singleton, locked as a unit.
///
/// Overlay resolution reads the roster, so keeping both under one guard
/// makes every read a consistent snapshot. No atomicity is promised
/// *across* calls: a client doing read-modify-write on the overlay can
/// still race another writer (last write wins).
#[derive(Debug, Default)]
pub struct SyncStore {
    pub teams: TeamRegistry,
    pub overlay: OverlayStore,
}

impl SyncStore {
    pub fn new(teams: TeamRegistry) -> Self {
        Self {
            teams,
            overlay: OverlayStore::default(),
        }
    }
}
