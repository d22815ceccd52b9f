// Application state module
// Read-only configuration plus the live connection counter

use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Config;

/// Application state shared by every connection task
pub struct AppState {
    pub config: Config,
    /// Connections currently being served
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            active_connections: AtomicUsize::new(0),
        }
    }

    pub fn active_connections(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
