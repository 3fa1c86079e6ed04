//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default upstream weather service address
pub const DEFAULT_WEATHER_BASE_URL: &str = "http://localhost:8081";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the upstream weather service
    pub weather_base_url: String,
    /// TTL in seconds for successful (or explicitly empty) lookups
    pub success_ttl: u64,
    /// TTL in seconds for failed lookups
    pub failure_ttl: u64,
    /// Per-request timeout in seconds for upstream calls
    pub upstream_timeout: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WEATHER_BASE_URL` - Upstream base address (default: http://localhost:8081)
    /// - `SUCCESS_TTL_SECONDS` - Success TTL in seconds (default: 300)
    /// - `FAILURE_TTL_SECONDS` - Failure TTL in seconds (default: 30, minimum 1)
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Upstream request timeout (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            weather_base_url: env::var("WEATHER_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.weather_base_url),
            success_ttl: env_or("SUCCESS_TTL_SECONDS", defaults.success_ttl),
            failure_ttl: env_or("FAILURE_TTL_SECONDS", defaults.failure_ttl).max(1),
            upstream_timeout: env_or("UPSTREAM_TIMEOUT_SECONDS", defaults.upstream_timeout),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            success_ttl: 300,
            failure_ttl: 30,
            upstream_timeout: 5,
            server_port: 3000,
        }
    }
}

/// Parses an environment variable, falling back to `default` when unset or invalid.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
