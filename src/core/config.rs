//! Configuration management for the MCP server.
//!
//! Configuration is read once from the environment at startup (after loading
//! an optional `.env` file) and never mutated afterwards.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{Error, Result};

/// Default model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Gemini API configuration.
    pub gemini: GeminiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
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

/// Gemini API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API credential, sent with every request.
    pub api_key: String,

    /// Model identifier used by every tool.
    pub model: String,

    /// REST API root, without a trailing `/models`.
    pub base_url: String,

    /// Upper bound on a single generation request.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "gemini-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            gemini: GeminiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; every other variable falls back to its
    /// default. Fails with [`Error::Config`] when the credential is missing
    /// or blank.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        config.gemini.api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config("GEMINI_API_KEY environment variable is not set"))?;

        if let Some(model) = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
        {
            config.gemini.model = model;
        }

        if let Ok(base_url) = std::env::var("GEMINI_API_BASE_URL") {
            config.gemini.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("GEMINI_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.gemini.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid GEMINI_TIMEOUT_SECS={:?}, using {}s",
                    timeout, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }
}
