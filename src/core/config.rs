//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file) once at startup. The
//! resulting value is immutable and handed to the components that need it.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default server identity reported to MCP clients.
pub const DEFAULT_SERVER_NAME: &str = "url-context-mcp";

/// Environment variable holding the search provider API key.
pub const API_KEY_ENV: &str = "SEARCH_MCP_API_KEY";

/// Default base URL of the Brave Search API.
pub const DEFAULT_BASE_URL: &str = "https://api.search.brave.com/res/v1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Search provider configuration.
    pub search: SearchConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Search provider configuration.
///
/// A missing `api_key` does not prevent startup; every provider call fails
/// with a missing-credential error instead.
#[derive(Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL the tool endpoints are resolved against.
    pub base_url: String,

    /// API key sent in the `X-Subscription-Token` header.
    pub api_key: Option<String>,

    /// Optional HTTP client timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl SearchConfig {
    /// Configuration pointing at `base_url` with the given key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: DEFAULT_SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_NAME`, `MCP_LOG_LEVEL`, `SEARCH_MCP_API_KEY`,
    /// `SEARCH_MCP_BASE_URL`, `SEARCH_MCP_TIMEOUT_SECS` and the transport
    /// variables read by [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_NAME") {
            if !name.is_empty() {
                config.server.name = name;
            }
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.search.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());

        if let Ok(base_url) = std::env::var("SEARCH_MCP_BASE_URL") {
            config.search.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("SEARCH_MCP_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.search.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring invalid SEARCH_MCP_TIMEOUT_SECS: {}", timeout),
            }
        }

        config
    }
}
