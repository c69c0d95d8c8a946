//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of generated values the result cache can hold
    pub cache_max_entries: usize,
    /// Lifetime in seconds of a cached value
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Initial seed for the shared random source, random when unset
    pub seed: Option<u64>,
    /// Default strict mode for requests that do not specify one
    pub strict: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cached values (default: 500)
    /// - `CACHE_TTL` - Cached value lifetime in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    /// - `GENERATOR_SEED` - Initial random seed (default: unset)
    /// - `STRICT_MODE` - Default strict mode, `true`/`1` to enable (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES").unwrap_or(defaults.cache_max_entries),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            seed: parse_var("GENERATOR_SEED"),
            strict: env::var("STRICT_MODE")
                .ok()
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.strict),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_max_entries: 500,
            cache_ttl: 300,
            server_port: 3000,
            cleanup_interval: 30,
            seed: None,
            strict: false,
        }
    }
}
