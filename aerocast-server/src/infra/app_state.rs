use std::{fmt, sync::Arc};

use tokio::sync::RwLock;

use crate::infra::config::Config;
use crate::store::SyncStore;

/// Shared handles injected into every request handler.
///
/// The store lock is the concurrency contract for the whole sync API:
/// each operation acquires it once, applies atomically and releases.
/// Operations are memory-only and never block while holding it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<SyncStore>>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(store: SyncStore, config: Arc<Config>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}
