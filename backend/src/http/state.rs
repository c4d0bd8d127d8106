//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::DisplayTypeSource;
use crate::store::DataStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Datasets loaded at startup; read-only from here on.
    pub store: Arc<DataStore>,
    /// Source of the per-response `displayType` annotation.
    pub display: DisplayTypeSource,
    /// Origins accepted by the CORS layer.
    pub allowed_origins: Arc<[String]>,
}

impl AppState {
    /// Create a new application state with the given store.
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Arc::new(store),
            display: DisplayTypeSource::default(),
            allowed_origins: Arc::from(Vec::new()),
        }
    }

    pub fn with_display(mut self, display: DisplayTypeSource) -> Self {
        self.display = display;
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = Arc::from(origins);
        self
    }
}
