// ABOUTME: Pure training-schedule periodization engine
// ABOUTME: Derives phase, paces, day assignment, and per-day workout composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Strider Engine
//!
//! The training-schedule periodization engine: a pure, deterministic,
//! single-week schedule generator. Given a runner's race goal and a race-time
//! prediction, it decides which phase of training the runner is in, how many
//! kilometers they should run this week, and which weekday gets which workout
//! at what pace, distance, duration, and intensity.
//!
//! The engine holds no state, performs no I/O, and takes "today" as an
//! explicit argument so every call is reproducible. It is re-invoked daily by
//! the surrounding service; caching is the caller's concern.
//!
//! ## Components
//!
//! - [`phase`]: race phase, plan length, and target weekly mileage
//! - [`paces`]: per-workout-type target paces from a race-time prediction
//! - [`assignment`]: mapping workout types onto weekdays
//! - [`composer`]: per-day distance, duration, pace, intensity, description

use chrono::NaiveDate;
use strider_core::models::{RacePrediction, TrainingGoal, WeekSummary, WeeklySchedule, WEEK};
use strider_core::AppResult;

/// Race phase resolution, plan length, and weekly mileage targets
pub mod phase;

/// Target pace derivation and time-string formatting
pub mod paces;

/// Workout-type selection and weekday placement
pub mod assignment;

/// Per-day workout composition (distance, duration, intensity, description)
pub mod composer;

pub use assignment::WeekAssignment;
pub use paces::PaceTable;
pub use phase::PhaseState;

/// Generate the full weekly schedule for a goal and race prediction.
///
/// This is the engine's single entry point: it validates the goal, plans the
/// phase state, derives paces, assigns workout types to weekdays, and composes
/// all seven days. Either the whole week is produced or the call fails; there
/// is no partial output.
///
/// # Errors
///
/// - `ConfigError` if `run_days_per_week` is outside 1..=7
/// - `InvalidPrediction` if the race prediction is non-positive
pub fn generate_week(
    goal: &TrainingGoal,
    prediction: RacePrediction,
    today: NaiveDate,
) -> AppResult<WeeklySchedule> {
    goal.validate()?;

    let state = phase::plan(goal, today);
    let pace_table = PaceTable::derive(prediction, goal.distance)?;
    let mut assignment = assignment::assign(
        state.race_phase,
        goal.run_days_per_week,
        goal.long_run_day,
    )?;
    if goal.rest_day_variety {
        assignment.apply_rest_variety();
    }

    let schedule: Vec<_> = WEEK
        .iter()
        .map(|&day| composer::compose(day, assignment.workout_for(day), &state, &pace_table, goal.distance))
        .collect();

    let weekly_intensity = schedule.iter().map(|d| d.intensity_score).sum();
    let summary = WeekSummary {
        weekly_mileage_km: round_1dp(state.weekly_mileage_km),
        weekly_intensity,
        current_week: state.current_week,
        total_weeks: state.total_weeks,
        race_phase: state.race_phase,
        weeks_until_race: state.weeks_until_race,
    };

    tracing::debug!(
        phase = %state.race_phase,
        week = state.current_week,
        total_weeks = state.total_weeks,
        mileage_km = summary.weekly_mileage_km,
        "generated weekly schedule"
    );

    Ok(WeeklySchedule { schedule, summary })
}

/// Round to one decimal place, the precision used for distances and mileage
#[must_use]
pub(crate) fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::models::{
        ExperienceLevel, PhaseSelection, RaceDistance, RacePhase, TrainingObjective, Weekday,
        WorkoutType,
    };

    fn goal(run_days: u8, long_run_day: Weekday, weeks_out: i64) -> TrainingGoal {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        TrainingGoal {
            distance: RaceDistance::FiveK,
            race_date: today + chrono::Duration::weeks(weeks_out),
            experience_level: ExperienceLevel::Intermediate,
            objective: TrainingObjective::PersonalRecord,
            run_days_per_week: run_days,
            long_run_day,
            phase: PhaseSelection::Auto,
            current_weekly_mileage_km: None,
            rest_day_variety: false,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn prediction() -> RacePrediction {
        // 22:00 5K
        RacePrediction::new(1320.0).unwrap()
    }

    #[test]
    fn test_build_phase_scenario_eight_weeks_out() {
        // 4 run days, Saturday long run, 5K, 8 weeks out, auto phase.
        let week = generate_week(&goal(4, Weekday::Saturday, 8), prediction(), today()).unwrap();

        assert_eq!(week.summary.race_phase, RacePhase::Build);
        assert_eq!(week.summary.weeks_until_race, 8);
        assert_eq!(week.schedule.len(), 7);

        let long_runs = week
            .schedule
            .iter()
            .filter(|d| d.workout_type == WorkoutType::LongRun)
            .count();
        assert_eq!(long_runs, 1);
        assert_eq!(
            week.day(Weekday::Saturday).unwrap().workout_type,
            WorkoutType::LongRun
        );

        let rest_days = week
            .schedule
            .iter()
            .filter(|d| d.workout_type.is_rest_day())
            .count();
        assert_eq!(rest_days, 3);

        // The build/4 table row carries a Threshold day.
        assert!(week
            .schedule
            .iter()
            .any(|d| d.workout_type == WorkoutType::Threshold));
    }

    #[test]
    fn test_past_race_date_resolves_to_taper() {
        let week = generate_week(&goal(3, Weekday::Sunday, -2), prediction(), today()).unwrap();
        assert_eq!(week.summary.weeks_until_race, 0);
        assert_eq!(week.summary.race_phase, RacePhase::Taper);
    }

    #[test]
    fn test_all_run_day_counts_hold_invariants() {
        for run_days in 1..=7u8 {
            let week =
                generate_week(&goal(run_days, Weekday::Sunday, 8), prediction(), today()).unwrap();
            let long_runs = week
                .schedule
                .iter()
                .filter(|d| d.workout_type == WorkoutType::LongRun)
                .count();
            let rests = week
                .schedule
                .iter()
                .filter(|d| d.workout_type.is_rest_day())
                .count();
            assert_eq!(long_runs, 1, "run_days={run_days}");
            assert_eq!(rests, 7 - usize::from(run_days), "run_days={run_days}");
        }
    }

    #[test]
    fn test_weekly_intensity_is_sum_of_days() {
        let week = generate_week(&goal(5, Weekday::Saturday, 8), prediction(), today()).unwrap();
        let total: u32 = week.schedule.iter().map(|d| d.intensity_score).sum();
        assert_eq!(week.summary.weekly_intensity, total);
        // Rest days never contribute.
        for day in week.schedule.iter().filter(|d| d.workout_type.is_rest_day()) {
            assert_eq!(day.intensity_score, 0);
        }
    }

    #[test]
    fn test_weekly_distance_total_is_in_sane_band() {
        // Daily distance factors are intentionally unnormalized, so the summed
        // distance tracks the weekly target loosely rather than exactly.
        let week = generate_week(&goal(5, Weekday::Saturday, 8), prediction(), today()).unwrap();
        let total: f64 = week.schedule.iter().filter_map(|d| d.distance_km).sum();
        let target = week.summary.weekly_mileage_km;
        assert!(
            total > target * 0.4 && total < target * 1.4,
            "total {total} vs target {target}"
        );
    }

    #[test]
    fn test_mileage_override_is_respected() {
        let mut g = goal(4, Weekday::Saturday, 8);
        g.current_weekly_mileage_km = Some(42.0);
        let week = generate_week(&g, prediction(), today()).unwrap();
        assert!((week.summary.weekly_mileage_km - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rest_day_variety_keeps_rest_count() {
        let mut g = goal(3, Weekday::Sunday, 8);
        g.rest_day_variety = true;
        let week = generate_week(&g, prediction(), today()).unwrap();
        let rests = week
            .schedule
            .iter()
            .filter(|d| d.workout_type.is_rest_day())
            .count();
        assert_eq!(rests, 4);
        // At least one rest day gets an active-recovery suggestion.
        assert!(week.schedule.iter().any(|d| matches!(
            d.workout_type,
            WorkoutType::ActiveRecovery | WorkoutType::StrengthTraining
        )));
    }

    #[test]
    fn test_invalid_run_days_rejected() {
        let err = generate_week(&goal(0, Weekday::Sunday, 8), prediction(), today()).unwrap_err();
        assert_eq!(err.code, strider_core::ErrorCode::ConfigError);
    }
}
