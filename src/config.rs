//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment name (e.g. "development", "production")
    pub environment: String,
    /// Comma-separated CORS origins, or "*" for any
    pub allowed_origins: String,
    /// Default log level for this crate when RUST_LOG is unset
    pub log_level: String,
    /// Maximum number of cached results; 0 disables caching
    pub cache_size: usize,
    /// Cached result lifetime in seconds
    pub cache_ttl: u64,
    /// Interface to bind
    pub host: String,
    /// HTTP server port
    pub port: u16,
    /// Maximum rows and columns accepted; 0 means unlimited
    pub max_dimension: usize,
    /// Seconds between background sweeps of expired entries; 0 disables the sweep
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ENVIRONMENT` - Deployment environment (default: development)
    /// - `ALLOWED_ORIGINS` - CORS origins (default: http://localhost:5173,http://localhost:3000)
    /// - `LOG_LEVEL` - Log level (default: info)
    /// - `CACHE_SIZE` - Maximum cached results (default: 100)
    /// - `CACHE_TTL` - Result TTL in seconds (default: 3600)
    /// - `HOST` - Bind address (default: 0.0.0.0)
    /// - `PORT` - HTTP server port (default: 8000)
    /// - `MAX_DIMENSION` - Row and column limit (default: 5)
    /// - `CLEANUP_INTERVAL` - Expired entry sweep in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            allowed_origins: env::var("ALLOWED_ORIGINS").unwrap_or(defaults.allowed_origins),
            log_level: env::var("LOG_LEVEL")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.log_level),
            cache_size: parse_var("CACHE_SIZE").unwrap_or(defaults.cache_size),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            max_dimension: parse_var("MAX_DIMENSION").unwrap_or(defaults.max_dimension),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }

    /// True when running in the production environment.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Parsed CORS origins. A lone "*" means any origin.
    pub fn cors_origins(&self) -> Vec<String> {
        if self.allowed_origins.trim() == "*" {
            return vec!["*".to_string()];
        }
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            allowed_origins: "http://localhost:5173,http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            cache_size: 100,
            cache_ttl: 3600,
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_dimension: 5,
            cleanup_interval: 60,
        }
    }
}
