// ABOUTME: Pace model - derives per-workout-type target paces from a race prediction
// ABOUTME: Includes m:ss / h:mm:ss time-string formatting and parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target pace derivation.
//!
//! A single race-time prediction fixes the base pace (seconds per km over the
//! race distance); training paces are fixed multiples of it, slower paces
//! carrying larger multipliers. Intervals deliberately have no table pace:
//! interval sessions are prescribed by effort in the workout description, so
//! their duration and intensity fall back to "unknown".

use strider_core::models::{RaceDistance, RacePrediction, WorkoutType};
use strider_core::{AppError, AppResult};

/// Pace multipliers relative to predicted race pace
const RECOVERY_MULTIPLIER: f64 = 1.30;
const EASY_MULTIPLIER: f64 = 1.15;
const THRESHOLD_MULTIPLIER: f64 = 1.04;
const LONG_RUN_MULTIPLIER: f64 = 1.20;

/// Per-workout-type target paces in seconds per km. Derived once per request,
/// immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceTable {
    /// Recovery-run pace
    pub recovery: f64,
    /// Easy-run pace
    pub easy: f64,
    /// Threshold pace
    pub threshold: f64,
    /// Long-run pace
    pub long_run: f64,
}

impl PaceTable {
    /// Derive training paces from a race prediction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPrediction` if the predicted duration is non-positive.
    pub fn derive(prediction: RacePrediction, distance: RaceDistance) -> AppResult<Self> {
        if prediction.seconds <= 0.0 || !prediction.seconds.is_finite() {
            return Err(AppError::invalid_prediction(format!(
                "race prediction must be positive, got {} seconds",
                prediction.seconds
            )));
        }

        let base = prediction.seconds / distance.distance_km();
        Ok(Self {
            recovery: base * RECOVERY_MULTIPLIER,
            easy: base * EASY_MULTIPLIER,
            threshold: base * THRESHOLD_MULTIPLIER,
            long_run: base * LONG_RUN_MULTIPLIER,
        })
    }

    /// Target pace in seconds per km for a workout type; `None` for types
    /// without a prescribed pace (Intervals and rest days)
    #[must_use]
    pub fn pace_sec_per_km(&self, workout: WorkoutType) -> Option<f64> {
        match workout {
            WorkoutType::Recovery => Some(self.recovery),
            WorkoutType::Easy => Some(self.easy),
            WorkoutType::Threshold => Some(self.threshold),
            WorkoutType::LongRun => Some(self.long_run),
            WorkoutType::Intervals
            | WorkoutType::Rest
            | WorkoutType::ActiveRecovery
            | WorkoutType::StrengthTraining => None,
        }
    }

    /// Target pace in minutes per km, quantized to the whole second the pace
    /// string shows, so durations match what the runner reads
    #[must_use]
    pub fn pace_min_per_km(&self, workout: WorkoutType) -> Option<f64> {
        self.pace_sec_per_km(workout)
            .map(|sec| sec.round() / 60.0)
    }

    /// Formatted pace string for a workout type, e.g. `"5:42"`
    #[must_use]
    pub fn pace_string(&self, workout: WorkoutType) -> Option<String> {
        self.pace_sec_per_km(workout).map(format_duration)
    }
}

/// Format a duration in seconds as `m:ss`, or `h:mm:ss` at one hour and
/// above. Rounds to the nearest whole second first.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as u64;
    if total < 3600 {
        format!("{}:{:02}", total / 60, total % 60)
    } else {
        format!(
            "{}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}

/// Parse a `m:ss` or `h:mm:ss` time string into whole seconds.
///
/// # Errors
///
/// Returns `InvalidInput` if the string is not a valid time.
pub fn parse_duration(value: &str) -> AppResult<u64> {
    let parts: Vec<&str> = value.split(':').collect();
    let numbers: Vec<u64> = parts
        .iter()
        .map(|p| {
            p.parse::<u64>()
                .map_err(|_| AppError::invalid_input(format!("invalid time string '{value}'")))
        })
        .collect::<AppResult<_>>()?;

    match numbers.as_slice() {
        [minutes, seconds] => Ok(minutes * 60 + seconds),
        [hours, minutes, seconds] => Ok(hours * 3600 + minutes * 60 + seconds),
        _ => Err(AppError::invalid_input(format!(
            "invalid time string '{value}', expected m:ss or h:mm:ss"
        ))),
    }
}
