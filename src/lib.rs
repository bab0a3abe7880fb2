// ABOUTME: Strider service shell - HTTP surface, cache, and provider wiring
// ABOUTME: Wraps the pure periodization engine with the service it ships inside
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Strider
//!
//! A rule-based running-plan service. The periodization engine itself lives in
//! [`strider_engine`] and is pure; this crate supplies the surrounding
//! service: environment configuration, structured logging, a TTL cache for
//! generated schedules, the race-prediction provider, and the HTTP routes.

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Schedule cache with pluggable backend
pub mod cache;

/// Race-prediction providers (wearable-account upstream)
pub mod providers;

/// HTTP route handlers
pub mod routes;

/// Schedule generation orchestration
pub mod services;

pub use strider_core::{AppError, AppResult, ErrorCode};

use std::sync::Arc;

use crate::cache::memory::InMemoryCache;
use crate::config::environment::ServerConfig;
use crate::providers::RacePredictionProvider;

/// Shared state handed to every route handler
pub struct ServerResources {
    /// Server configuration snapshot
    pub config: ServerConfig,
    /// Schedule cache
    pub cache: InMemoryCache,
    /// Upstream race-prediction source
    pub provider: Arc<dyn RacePredictionProvider>,
}

impl ServerResources {
    /// Bundle the shared server state
    #[must_use]
    pub fn new(
        config: ServerConfig,
        cache: InMemoryCache,
        provider: Arc<dyn RacePredictionProvider>,
    ) -> Self {
        Self {
            config,
            cache,
            provider,
        }
    }
}
