// ABOUTME: Configuration module for the Strider service
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Environment variable parsing into typed server configuration
pub mod environment;

pub use environment::{CacheSettings, PredictionProviderConfig, ServerConfig};
