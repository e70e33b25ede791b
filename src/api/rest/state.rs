//! Application state for API handlers

use crate::config::ChainConfig;
use crate::storage::Storage;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Storage backend
    pub storage: Arc<dyn Storage>,

    /// Immutable chain settings captured at startup
    pub chain: ChainConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(storage: Arc<dyn Storage>, chain: ChainConfig) -> Self {
        Self { storage, chain }
    }
}
