// ABOUTME: Schedule service - cached weekly schedule generation
// ABOUTME: Cache lookup, race-prediction fetch, engine invocation, cache write
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schedule generation orchestration.
//!
//! The flow per request: resolve the phase state, build the fingerprint from
//! every schedule-affecting input, and check the cache. On a hit younger than
//! the TTL the cached week is returned without touching the upstream. On a
//! miss the race prediction is fetched, the engine generates the week, and the
//! result is cached. Failures never leave a partial schedule behind: the cache
//! write happens only after generation succeeds.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use strider_core::models::{TrainingGoal, WeeklySchedule};
use strider_core::AppResult;
use strider_engine::phase;

use crate::cache::memory::InMemoryCache;
use crate::cache::{CacheProvider, ScheduleFingerprint};
use crate::providers::RacePredictionProvider;

/// Weekly schedule generation with fingerprint-keyed caching
pub struct ScheduleService {
    cache: InMemoryCache,
    provider: Arc<dyn RacePredictionProvider>,
    cache_ttl: Duration,
}

impl ScheduleService {
    /// Assemble the service from its collaborators
    #[must_use]
    pub fn new(
        cache: InMemoryCache,
        provider: Arc<dyn RacePredictionProvider>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            cache,
            provider,
            cache_ttl,
        }
    }

    /// Produce the weekly schedule for a goal as of `today`.
    ///
    /// # Errors
    ///
    /// - `ConfigError` for an invalid goal
    /// - `PredictionUnavailable` when the upstream has no prediction for the
    ///   goal distance
    /// - `ExternalServiceError` when the upstream call fails
    pub async fn weekly_schedule(
        &self,
        goal: &TrainingGoal,
        today: NaiveDate,
    ) -> AppResult<WeeklySchedule> {
        goal.validate()?;

        let state = phase::plan(goal, today);
        let fingerprint = ScheduleFingerprint {
            race_date: goal.race_date,
            distance: goal.distance,
            race_phase: state.race_phase,
            run_days: goal.run_days_per_week,
            long_run_day: goal.long_run_day,
            weekly_mileage_km: state.weekly_mileage_km,
            experience_level: goal.experience_level,
            objective: goal.objective,
            rest_day_variety: goal.rest_day_variety,
        };

        if let Some(cached) = self.cache.get::<WeeklySchedule>(&fingerprint).await? {
            debug!(key = %fingerprint, "schedule cache hit");
            return Ok(cached);
        }

        let prediction = self.provider.race_prediction(goal.distance).await?;
        let week = strider_engine::generate_week(goal, prediction, today)?;

        self.cache.set(&fingerprint, &week, self.cache_ttl).await?;
        info!(
            distance = %goal.distance,
            phase = %week.summary.race_phase,
            week = week.summary.current_week,
            "generated and cached weekly schedule"
        );

        Ok(week)
    }
}
