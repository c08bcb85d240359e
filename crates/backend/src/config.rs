//! Backend configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VELOCITY_HOST` - Bind address for the dev server (default: 127.0.0.1)
//! - `VELOCITY_PORT` - Listen port (default: 8000)
//! - `VELOCITY_STORAGE_PATH` - JSON storage file; absent means in-memory
//! - `VELOCITY_LATENCY_MS` - Simulated round-trip latency (default: 150)
//! - `VELOCITY_COMPAT` - `canonical` (default) or `legacy-demo`
//! - `VELOCITY_CORS_ORIGINS` - Comma-separated allowed origins (default: *)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::quirks::Quirks;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Mock backend configuration.
///
/// `Default` is the test profile: in-memory storage, zero latency,
/// canonical behavior. `from_env` is the dev-server profile and defaults
/// the latency to the demo's 150 ms.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// IP address the dev server binds to
    pub host: IpAddr,
    /// Port the dev server listens on
    pub port: u16,
    /// Storage file path; `None` selects the in-memory backend
    pub storage_path: Option<PathBuf>,
    /// Simulated round-trip latency applied to every engine operation
    pub latency: Duration,
    /// Active compatibility profile
    pub quirks: Quirks,
    /// Allowed CORS origins for the dev server (`*` allows any)
    pub cors_origins: Vec<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
            storage_path: None,
            latency: Duration::ZERO,
            quirks: Quirks::canonical(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl BackendConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("VELOCITY_HOST", "127.0.0.1")?;
        let port = parse_env("VELOCITY_PORT", "8000")?;
        let storage_path = get_optional_env("VELOCITY_STORAGE_PATH").map(PathBuf::from);
        let latency_ms: u64 = parse_env("VELOCITY_LATENCY_MS", "150")?;
        let quirks = parse_env("VELOCITY_COMPAT", "canonical")?;
        let cors_origins = get_env_or_default("VELOCITY_CORS_ORIGINS", "*")
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            storage_path,
            latency: Duration::from_millis(latency_ms),
            quirks,
            cors_origins,
        })
    }

    /// Returns the socket address for binding the dev server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
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

/// Parse an environment variable, falling back to a default literal.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
