// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures log levels and output formats from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured logging with configurable output format

use std::env;

use strider_core::constants::service;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log filter directive (falls back when `RUST_LOG` is unset)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        Self { level, format }
    }
}

/// Initialize the global tracing subscriber from the environment.
///
/// Call once at startup; a second call is a no-op error from the subscriber
/// and is surfaced to the caller.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_from_env() -> anyhow::Result<()> {
    let config = LoggingConfig::from_env();
    init(&config)
}

/// Initialize the global tracing subscriber with an explicit configuration
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.format {
        LogFormat::Json => builder.json().try_init().map_err(anyhow::Error::msg)?,
        LogFormat::Pretty => builder.pretty().try_init().map_err(anyhow::Error::msg)?,
        LogFormat::Compact => builder.compact().try_init().map_err(anyhow::Error::msg)?,
    }

    info!(
        service = service::NAME,
        version = env!("CARGO_PKG_VERSION"),
        format = ?config.format,
        "logging initialized"
    );
    Ok(())
}
