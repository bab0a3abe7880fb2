// ABOUTME: Schedule request inputs - the runner's training goal and race prediction
// ABOUTME: Immutable per-request values consumed by the periodization engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::race::{ExperienceLevel, PhaseSelection, RaceDistance, TrainingObjective};
use crate::models::week::Weekday;

/// The runner's race goal and weekly constraints. Built once per request and
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingGoal {
    /// Target race distance
    pub distance: RaceDistance,
    /// Race day
    pub race_date: NaiveDate,
    /// Runner experience level
    pub experience_level: ExperienceLevel,
    /// What the runner wants out of the race
    pub objective: TrainingObjective,
    /// Number of running days per week, 1 to 7
    pub run_days_per_week: u8,
    /// Fixed weekday for the long run
    pub long_run_day: Weekday,
    /// Requested phase, or automatic resolution
    pub phase: PhaseSelection,
    /// Runner-supplied weekly mileage override in km
    pub current_weekly_mileage_km: Option<f64>,
    /// Suggest active-recovery and strength work on rest days
    pub rest_day_variety: bool,
}

impl TrainingGoal {
    /// Validate range constraints that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `run_days_per_week` is outside 1..=7.
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=7).contains(&self.run_days_per_week) {
            return Err(AppError::config(format!(
                "runDays must be between 1 and 7, got {}",
                self.run_days_per_week
            )));
        }
        Ok(())
    }
}

/// A single race-time prediction for the target distance, sourced from the
/// runner's wearable account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RacePrediction {
    /// Predicted finish time in seconds
    pub seconds: f64,
}

impl RacePrediction {
    /// Wrap a predicted finish time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPrediction` if the duration is not positive.
    pub fn new(seconds: f64) -> AppResult<Self> {
        if seconds <= 0.0 || !seconds.is_finite() {
            return Err(AppError::invalid_prediction(format!(
                "race prediction must be a positive duration in seconds, got {seconds}"
            )));
        }
        Ok(Self { seconds })
    }
}
