//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::BackendConfig;
use crate::fixtures::FixtureStore;
use crate::quirks::Quirks;
use crate::storage::{FileBackend, JsonStore, MemoryBackend, StorageError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the injected fixture dataset, and the storage handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BackendConfig,
    fixtures: FixtureStore,
    store: JsonStore,
}

impl AppState {
    /// Create application state, selecting the storage backend from the
    /// configuration: a JSON file when `storage_path` is set, in-memory
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be opened.
    pub fn new(config: BackendConfig, fixtures: FixtureStore) -> Result<Self, StorageError> {
        let store = match &config.storage_path {
            Some(path) => JsonStore::new(Arc::new(FileBackend::open(path)?)),
            None => JsonStore::new(Arc::new(MemoryBackend::new())),
        };
        Ok(Self::with_store(config, fixtures, store))
    }

    /// Create application state over an existing storage handle.
    ///
    /// Useful when several routers must share one persisted state, as the
    /// integration tests do to model page reloads.
    #[must_use]
    pub fn with_store(config: BackendConfig, fixtures: FixtureStore, store: JsonStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                fixtures,
                store,
            }),
        }
    }

    /// Get a reference to the backend configuration.
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    /// Get a reference to the fixture dataset.
    #[must_use]
    pub fn fixtures(&self) -> &FixtureStore {
        &self.inner.fixtures
    }

    /// Get a reference to the storage handle.
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.inner.store
    }

    /// The active compatibility profile.
    #[must_use]
    pub fn quirks(&self) -> Quirks {
        self.inner.config.quirks
    }

    /// The simulated round-trip latency engines pause for.
    #[must_use]
    pub fn round_trip(&self) -> Duration {
        self.inner.config.latency
    }
}
