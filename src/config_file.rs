//! Configuration file support
//!
//! Loads server configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{DefaultsConfig, ServerConfig, UpstreamConfig};
use crate::error::{RelayError, Result};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: ServerSettings,
    /// Upstream timedtext settings
    pub upstream: Option<UpstreamSettings>,
    /// Request default settings
    pub defaults: Option<DefaultsSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Base URL of the timedtext endpoint
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsSettings {
    /// Video id used when `id` is absent
    pub video_id: Option<String>,
    /// Language used when `lang` is absent
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| RelayError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RelayError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let config = ServerConfig::default();
        Self {
            server: ServerSettings {
                host: config.host,
                port: config.port,
                cors_enabled: Some(config.cors_enabled),
            },
            upstream: Some(UpstreamSettings {
                base_url: Some(config.upstream.base_url),
                timeout_secs: config.upstream.timeout_secs,
            }),
            defaults: Some(DefaultsSettings {
                video_id: Some(config.defaults.video_id),
                lang: Some(config.defaults.lang),
            }),
            logging: Some(LoggingSettings {
                level: config.log_level,
                format: Some(config.log_format),
            }),
        }
    }

    /// Convert to ServerConfig
    pub fn into_server_config(self) -> ServerConfig {
        let fallback = ServerConfig::default();

        let upstream = match self.upstream {
            Some(u) => UpstreamConfig {
                base_url: u.base_url.unwrap_or(fallback.upstream.base_url),
                timeout_secs: u.timeout_secs,
            },
            None => fallback.upstream,
        };

        let defaults = match self.defaults {
            Some(d) => DefaultsConfig {
                video_id: d.video_id.unwrap_or(fallback.defaults.video_id),
                lang: d.lang.unwrap_or(fallback.defaults.lang),
            },
            None => fallback.defaults,
        };

        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or(fallback.log_format)),
            None => (fallback.log_level, fallback.log_format),
        };

        ServerConfig {
            host: self.server.host,
            port: self.server.port,
            cors_enabled: self.server.cors_enabled.unwrap_or(fallback.cors_enabled),
            log_level,
            log_format,
            upstream,
            defaults,
        }
    }
}

/// Load the server configuration from `path`.
///
/// A missing file yields the defaults. A file that exists but cannot be read or
/// parsed is an error, and so is a configuration that fails validation.
pub fn load_server_config<P: AsRef<Path>>(path: P) -> Result<ServerConfig> {
    let path = path.as_ref();
    let config = if path.exists() {
        ConfigFile::from_file(path)?.into_server_config()
    } else {
        ServerConfig::default()
    };
    config.validate().map_err(RelayError::Config)?;
    Ok(config)
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
