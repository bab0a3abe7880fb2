// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration.
//!
//! Configuration is environment-only: every knob has a default suitable for
//! local development, and deployments override through `STRIDER_*` variables.

use std::env;
use std::time::Duration;

use strider_core::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS, TTL_SCHEDULE_SECS,
};
use strider_core::{AppError, AppResult};

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Full server configuration snapshot, built once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Schedule cache settings
    pub cache: CacheSettings,
    /// Race-prediction upstream settings
    pub predictions: PredictionProviderConfig,
}

/// Cache sizing and freshness settings
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Maximum number of cached schedules held in memory
    pub max_entries: usize,
    /// Freshness window for cached schedules
    pub schedule_ttl: Duration,
    /// Interval between background sweeps for expired entries
    pub cleanup_interval: Duration,
}

/// Race-prediction upstream settings
#[derive(Debug, Clone)]
pub struct PredictionProviderConfig {
    /// Base URL of the wearable-account predictions API
    pub base_url: Option<String>,
    /// Bearer token for the predictions API
    pub api_token: Option<String>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            schedule_ttl: Duration::from_secs(TTL_SCHEDULE_SECS),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            http_port: parse_env("STRIDER_HTTP_PORT")?.unwrap_or(DEFAULT_HTTP_PORT),
            cache: CacheSettings {
                max_entries: parse_env("STRIDER_CACHE_MAX_ENTRIES")?
                    .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
                schedule_ttl: Duration::from_secs(
                    parse_env("STRIDER_SCHEDULE_TTL_SECS")?.unwrap_or(TTL_SCHEDULE_SECS),
                ),
                cleanup_interval: Duration::from_secs(
                    parse_env("STRIDER_CACHE_CLEANUP_SECS")?
                        .unwrap_or(DEFAULT_CLEANUP_INTERVAL_SECS),
                ),
            },
            predictions: PredictionProviderConfig {
                base_url: env::var("STRIDER_PREDICTIONS_URL").ok(),
                api_token: env::var("STRIDER_PREDICTIONS_TOKEN").ok(),
            },
        })
    }

    /// One-line configuration summary for startup logging. Never includes
    /// secrets.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} cache_entries={} schedule_ttl={}s predictions_url={}",
            self.http_port,
            self.cache.max_entries,
            self.cache.schedule_ttl.as_secs(),
            self.predictions.base_url.as_deref().unwrap_or("<unset>"),
        )
    }
}

/// Parse an optional environment variable into any `FromStr` type
fn parse_env<T: std::str::FromStr>(name: &str) -> AppResult<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw.parse().map(Some).map_err(|_| {
            AppError::config(format!("environment variable {name} has invalid value '{raw}'"))
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        env::remove_var("STRIDER_HTTP_PORT");
        env::remove_var("STRIDER_CACHE_MAX_ENTRIES");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 8081);
        assert_eq!(config.cache.max_entries, 1000);
        assert_eq!(config.cache.schedule_ttl.as_secs(), 86_400);
        assert!(config.predictions.base_url.is_none());
    }

    #[test]
    #[serial]
    fn test_port_override() {
        env::set_var("STRIDER_HTTP_PORT", "9090");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 9090);
        env::remove_var("STRIDER_HTTP_PORT");
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        env::set_var("STRIDER_HTTP_PORT", "not-a-port");
        assert!(ServerConfig::from_env().is_err());
        env::remove_var("STRIDER_HTTP_PORT");
    }

    #[test]
    fn test_summary_has_no_token() {
        let config = ServerConfig {
            http_port: 8081,
            cache: CacheSettings::default(),
            predictions: PredictionProviderConfig {
                base_url: Some("https://api.example.com".into()),
                api_token: Some("secret-token".into()),
            },
        };
        assert!(!config.summary().contains("secret-token"));
    }
}
