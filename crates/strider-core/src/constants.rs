// ABOUTME: Application-wide constants for the Strider service
// ABOUTME: Cache sizing, TTL windows, and schedule defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application constants organized by domain

/// Cache sizing and freshness constants
pub mod cache {
    /// Freshness window for a generated weekly schedule. A cache hit older
    /// than this is treated as a miss.
    pub const TTL_SCHEDULE_SECS: u64 = 24 * 60 * 60;

    /// Default maximum number of cached schedules held in memory
    pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1000;

    /// Default interval between background sweeps for expired entries
    pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;
}

/// Schedule request defaults (optional fields only; required fields have no
/// fallback by design)
pub mod defaults {
    /// Default experience level when the request omits one
    pub const EXPERIENCE_LEVEL: &str = "intermediate";

    /// Default training goal when the request omits one
    pub const TRAINING_GOAL: &str = "pr";
}

/// Service identification for logging
pub mod service {
    /// Service name used in structured log output
    pub const NAME: &str = "strider-server";
}
