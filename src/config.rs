//! Server configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timedtext endpoint
pub const DEFAULT_UPSTREAM_URL: &str = "https://video.google.com/timedtext";

/// Video id used when a request carries no `id` parameter
pub const DEFAULT_VIDEO_ID: &str = "dL5oGKNlR6I";

/// Caption language used when a request carries no `lang` parameter
pub const DEFAULT_LANG: &str = "de";

/// Upstream timedtext endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the timedtext endpoint, without query string
    pub base_url: String,

    /// Overall request timeout in seconds. None keeps the HTTP client defaults.
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Query parameter defaults applied at the handler boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub video_id: String,
    pub lang: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            video_id: DEFAULT_VIDEO_ID.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,

    /// Upstream configuration
    pub upstream: UpstreamConfig,

    /// Request defaults
    pub defaults: DefaultsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_enabled: true,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            upstream: UpstreamConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let base = &self.upstream.base_url;
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err("Upstream URL must start with http:// or https://".to_string());
        }
        if base.contains('?') {
            return Err("Upstream URL must not carry a query string".to_string());
        }
        if self.upstream.timeout_secs == Some(0) {
            return Err("Upstream timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}
