//! Configuration management for the MCP server.
//!
//! Values come from defaults, then a `.env` file, then environment variables.
//! The Golf Genius API key is the only required setting.

use super::api::{AuthMode, Timeouts};
use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default upstream host.
pub const DEFAULT_BASE_URL: &str = "https://www.golfgenius.com";

/// Fixed API path prefix placed between the host and the endpoint.
pub const DEFAULT_API_PREFIX: &str = "api_v2";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Golf Genius credentials.
    pub credentials: CredentialsConfig,

    /// Golf Genius API client settings.
    pub api: ApiConfig,
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

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Golf Genius API key (`GOLF_GENIUS_API_KEY`).
    pub golf_genius_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "golf_genius_api_key",
                &self.golf_genius_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Golf Genius API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Upstream host, without the API prefix.
    pub base_url: String,

    /// API path prefix (e.g. `api_v2`).
    pub api_prefix: String,

    /// How the credential is attached to requests.
    pub auth_mode: AuthMode,

    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Total request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Rate-limit retry schedule.
    pub retry: RetryConfig,
}

/// Rate-limit retry schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts, including the first one.
    pub max_attempts: u32,

    /// Delay before the second attempt, doubled for each one after.
    pub initial_backoff_ms: u64,

    /// Upper bound for a single delay.
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 2_000,
            max_backoff_ms: 30_000,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            auth_mode: AuthMode::default(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Connection timeouts for the shared HTTP client.
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(self.connect_timeout_secs),
            request: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "golf-genius-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.env` file and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.credentials.golf_genius_api_key = std::env::var("GOLF_GENIUS_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if let Ok(base_url) = std::env::var("GOLF_GENIUS_BASE_URL") {
            info!("Using Golf Genius base URL: {}", base_url);
            config.api.base_url = base_url;
        }

        if let Ok(prefix) = std::env::var("GOLF_GENIUS_API_PREFIX") {
            config.api.api_prefix = prefix;
        }

        if let Ok(mode) = std::env::var("GOLF_GENIUS_AUTH_MODE") {
            match mode.parse() {
                Ok(mode) => config.api.auth_mode = mode,
                Err(e) => warn!("{}; keeping {:?}", e, config.api.auth_mode),
            }
        }

        if let Some(secs) = env_parse("GOLF_GENIUS_CONNECT_TIMEOUT_SECS") {
            config.api.connect_timeout_secs = secs;
        }

        if let Some(secs) = env_parse("GOLF_GENIUS_REQUEST_TIMEOUT_SECS") {
            config.api.request_timeout_secs = secs;
        }

        if let Some(attempts) = env_parse("GOLF_GENIUS_RETRY_MAX_ATTEMPTS") {
            config.api.retry.max_attempts = attempts;
        }

        config
    }

    /// The API key, or a configuration error when it is missing.
    pub fn require_api_key(&self) -> Result<&str> {
        self.credentials
            .golf_genius_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config("GOLF_GENIUS_API_KEY environment variable is not set."))
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {}", name, raw);
            None
        }
    }
}
