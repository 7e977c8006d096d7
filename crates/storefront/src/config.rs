//! Shop widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; documented defaults apply.
//!
//! - `BLUESHOP_HOST` - Bind address (default: 127.0.0.1)
//! - `BLUESHOP_PORT` - Listen port (default: 3000)
//! - `BLUESHOP_API_BASE_URL` - Shop API origin the widget talks to
//!   (default: `http://127.0.0.1:8000`)
//! - `BLUESHOP_CART_FILE` - Path of the persisted cart file
//!   (default: `blueshop_cart.json`)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default shop API origin when `BLUESHOP_API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default cart storage file, the widget's single persisted key.
pub const DEFAULT_CART_FILE: &str = "blueshop_cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop widget application configuration.
///
/// Resolved once at startup; handlers read it through the shared state.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Upstream shop API configuration
    pub backend: BackendConfig,
    /// Path of the persisted cart file
    pub cart_file: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Upstream shop API configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// API origin; endpoint paths are appended to this. Never ends with a
    /// slash.
    pub base_url: String,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BLUESHOP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BLUESHOP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BLUESHOP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BLUESHOP_PORT".to_string(), e.to_string()))?;

        let backend = BackendConfig::from_env()?;
        let cart_file = PathBuf::from(get_env_or_default("BLUESHOP_CART_FILE", DEFAULT_CART_FILE));
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            backend,
            cart_file,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BackendConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::new(&get_env_or_default(
            "BLUESHOP_API_BASE_URL",
            DEFAULT_API_BASE_URL,
        ))
    }

    /// Validate and normalize an API origin.
    ///
    /// Trailing slashes are trimmed so endpoint paths can be appended
    /// uniformly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the value is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("BLUESHOP_API_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
