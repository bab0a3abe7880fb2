// ABOUTME: Schedule output types - per-day entries and the weekly summary
// ABOUTME: JSON shapes match the schedule API response, days fixed Monday to Sunday
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::models::race::RacePhase;
use crate::models::week::Weekday;
use crate::models::workout::WorkoutType;

/// One scheduled day. Rest days carry no distance, pace, or duration and
/// always have an intensity score of zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// Day of the week
    pub day: Weekday,
    /// Assigned workout type
    pub workout_type: WorkoutType,
    /// Planned distance in km, one-decimal precision; absent on rest days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Estimated duration in whole minutes; absent when the type has no pace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<u32>,
    /// Target pace, e.g. "5:30 per km"; absent when the type has no pace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_pace: Option<String>,
    /// Human-readable workout description
    pub details: String,
    /// Unitless training-load score; zero on rest days
    pub intensity_score: u32,
}

/// Aggregate view of the generated week
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    /// Target weekly mileage in km (nominal; daily factors are unnormalized)
    pub weekly_mileage_km: f64,
    /// Sum of daily intensity scores
    pub weekly_intensity: u32,
    /// 1-indexed week within the plan
    pub current_week: u32,
    /// Total plan length in weeks
    pub total_weeks: u32,
    /// Resolved training phase
    pub race_phase: RacePhase,
    /// Whole weeks remaining until race day, clamped to zero
    pub weeks_until_race: u32,
}

/// The full engine output: seven days in Monday-to-Sunday order plus the
/// weekly summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Exactly seven entries, Monday through Sunday
    pub schedule: Vec<DaySchedule>,
    /// Weekly aggregate
    pub summary: WeekSummary,
}

impl WeeklySchedule {
    /// Look up the entry for a given weekday
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.schedule.iter().find(|d| d.day == day)
    }
}
