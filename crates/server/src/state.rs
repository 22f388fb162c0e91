use crate::config::ServerConfig;
use snipmatch::EngineConfig;
use std::sync::Arc;

/// Shared application state
///
/// The scoring engine is pure, so the only thing requests share is the
/// configuration snapshot taken at startup.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Engine tuning to apply to a scoring batch
    pub fn engine_config(&self) -> EngineConfig {
        self.config.engine.clone()
    }
}
