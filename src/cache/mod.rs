// ABOUTME: Cache abstraction for generated weekly schedules
// ABOUTME: Pluggable backend trait plus the schedule fingerprint cache key
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schedule cache.
//!
//! Generated schedules are cached for 24 hours keyed by the request
//! fingerprint: every input that affects the output, plus the resolved weekly
//! mileage. A hit older than the TTL is a miss; a fresh write always wins over
//! an older entry for the same fingerprint.

/// In-memory cache implementation
pub mod memory;

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strider_core::models::{
    ExperienceLevel, RaceDistance, RacePhase, TrainingObjective, Weekday,
};
use strider_core::AppResult;

/// Cache provider trait for pluggable backend implementations
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync {
    /// Store a value with a TTL.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails.
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &ScheduleFingerprint,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Retrieve a value; `None` on miss or expiry.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        key: &ScheduleFingerprint,
    ) -> AppResult<Option<T>>;

    /// Remove a single entry.
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails.
    async fn invalidate(&self, key: &ScheduleFingerprint) -> AppResult<()>;

    /// Check whether a live (unexpired) entry exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the existence check fails.
    async fn exists(&self, key: &ScheduleFingerprint) -> AppResult<bool>;

    /// Clear all entries (for testing/admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the clear operation fails.
    async fn clear_all(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub max_entries: usize,
    /// Cleanup interval for expired entries
    pub cleanup_interval: Duration,
    /// Enable the background cleanup task (disable in tests to avoid runtime
    /// conflicts)
    pub enable_background_cleanup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        use strider_core::constants::cache::{
            DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS,
        };
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            enable_background_cleanup: true,
        }
    }
}

/// The tuple of all schedule-affecting inputs, used as the cache key.
///
/// Includes the resolved weekly mileage rather than the raw request override
/// so that two requests resolving to the same plan share an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleFingerprint {
    /// Race day
    pub race_date: NaiveDate,
    /// Target race distance
    pub distance: RaceDistance,
    /// Resolved race phase
    pub race_phase: RacePhase,
    /// Running days per week
    pub run_days: u8,
    /// Fixed long-run weekday
    pub long_run_day: Weekday,
    /// Resolved weekly mileage in km
    pub weekly_mileage_km: f64,
    /// Runner experience level
    pub experience_level: ExperienceLevel,
    /// Training objective
    pub objective: TrainingObjective,
    /// Whether rest days are upgraded to active-recovery suggestions
    pub rest_day_variety: bool,
}

impl fmt::Display for ScheduleFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mileage is keyed at the same one-decimal precision the API reports.
        write!(
            f,
            "schedule:{}:{}:{}:{}:{}:{:.1}:{}:{}:{}",
            self.race_date,
            self.distance,
            self.race_phase,
            self.run_days,
            self.long_run_day,
            self.weekly_mileage_km,
            self.experience_level,
            self.objective,
            self.rest_day_variety,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_key_format() {
        let fp = ScheduleFingerprint {
            race_date: NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
            distance: RaceDistance::FiveK,
            race_phase: RacePhase::Build,
            run_days: 4,
            long_run_day: Weekday::Saturday,
            weekly_mileage_km: 29.44,
            experience_level: ExperienceLevel::Intermediate,
            objective: TrainingObjective::PersonalRecord,
            rest_day_variety: false,
        };
        assert_eq!(
            fp.to_string(),
            "schedule:2026-05-03:5K:build:4:Saturday:29.4:intermediate:pr:false"
        );
    }

    #[test]
    fn test_rest_day_variety_changes_key() {
        let off = ScheduleFingerprint {
            race_date: NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
            distance: RaceDistance::FiveK,
            race_phase: RacePhase::Build,
            run_days: 4,
            long_run_day: Weekday::Saturday,
            weekly_mileage_km: 29.4,
            experience_level: ExperienceLevel::Intermediate,
            objective: TrainingObjective::PersonalRecord,
            rest_day_variety: false,
        };
        let mut on = off.clone();
        on.rest_day_variety = true;
        assert_ne!(off.to_string(), on.to_string());
    }

    #[test]
    fn test_mileage_precision_stabilizes_key() {
        let base = ScheduleFingerprint {
            race_date: NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
            distance: RaceDistance::TenK,
            race_phase: RacePhase::Peak,
            run_days: 5,
            long_run_day: Weekday::Sunday,
            weekly_mileage_km: 56.4401,
            experience_level: ExperienceLevel::Advanced,
            objective: TrainingObjective::Compete,
            rest_day_variety: false,
        };
        let mut other = base.clone();
        other.weekly_mileage_km = 56.4399;
        assert_eq!(base.to_string(), other.to_string());
    }
}
