//! Application state management
//!
//! AppState holds the immutable server configuration and the shared
//! timedtext client. Nothing in it changes after startup.

use crate::config::{DefaultsConfig, ServerConfig};
use crate::error::Result;
use crate::timedtext::TimedTextClient;

/// Main application state
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Upstream timedtext client
    pub client: TimedTextClient,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Result<Self> {
        let client = TimedTextClient::new(&config.upstream)?;
        Ok(Self { config, client })
    }

    /// Query parameter defaults for the handlers
    pub fn defaults(&self) -> &DefaultsConfig {
        &self.config.defaults
    }
}
