// ABOUTME: Workout composer - turns a day's workout type into a full schedule entry
// ABOUTME: Computes distance, duration, pace string, intensity score, and description
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-day workout composition.
//!
//! Each run day gets a share of the weekly mileage from a per-type distance
//! factor; the long-run share additionally ramps with the phase. The factors
//! are deliberately not normalized to sum to 1.0 across the week, so the
//! weekly mileage target is nominal rather than a hard total. Composition
//! never fails: types without a prescribed pace simply omit duration and
//! score zero intensity.

use strider_core::models::{DaySchedule, RaceDistance, RacePhase, Weekday, WorkoutType};

use crate::paces::PaceTable;
use crate::phase::PhaseState;
use crate::round_1dp;

/// Clamp band for the phase-adjusted long-run distance factor
const LONG_RUN_FACTOR_MIN: f64 = 0.05;
const LONG_RUN_FACTOR_MAX: f64 = 0.35;

/// Share of weekly mileage for a workout type. The long-run share ramps with
/// the phase in the same style as the weekly phase multiplier; other types
/// are flat.
#[must_use]
pub fn distance_factor(
    workout: WorkoutType,
    phase: RacePhase,
    current_week: u32,
    total_weeks: u32,
) -> f64 {
    match workout {
        WorkoutType::Recovery | WorkoutType::Intervals => 0.10,
        WorkoutType::Easy => 0.15,
        WorkoutType::Threshold => 0.12,
        WorkoutType::LongRun => long_run_factor(phase, current_week, total_weeks),
        WorkoutType::Rest | WorkoutType::ActiveRecovery | WorkoutType::StrengthTraining => 0.0,
    }
}

fn long_run_factor(phase: RacePhase, current_week: u32, total_weeks: u32) -> f64 {
    let week = f64::from(current_week);
    let total = f64::from(total_weeks.max(1));

    let raw = match phase {
        RacePhase::Base => 0.25 + 0.05 * week / (total * 0.3),
        RacePhase::Build => 0.30 - 0.02 * (week - total * 0.3) / (total * 0.5),
        RacePhase::Peak => 0.28,
        RacePhase::Taper => 0.20 - 0.05 * (week - total * 0.9) / (total * 0.1),
    };

    raw.clamp(LONG_RUN_FACTOR_MIN, LONG_RUN_FACTOR_MAX)
}

/// Compose the full schedule entry for one day. Never fails: rest days carry
/// no distance or pace, and pace-less run types omit duration.
#[must_use]
pub fn compose(
    day: Weekday,
    workout: WorkoutType,
    state: &PhaseState,
    paces: &PaceTable,
    distance: RaceDistance,
) -> DaySchedule {
    if workout.is_rest_day() {
        return DaySchedule {
            day,
            workout_type: workout,
            distance_km: None,
            duration_min: None,
            target_pace: None,
            details: rest_day_details(workout).to_owned(),
            intensity_score: 0,
        };
    }

    let factor = distance_factor(workout, state.race_phase, state.current_week, state.total_weeks);
    let distance_km = round_1dp(state.weekly_mileage_km * factor);
    let pace_min = paces.pace_min_per_km(workout);

    let duration_min = pace_min.map(|p| (distance_km * p).round() as u32);
    let intensity_score = pace_min
        .map_or(0, |p| (distance_km * workout.intensity_factor() * p).round() as u32);
    let target_pace = paces
        .pace_string(workout)
        .map(|pace| format!("{pace} per km"));

    DaySchedule {
        day,
        workout_type: workout,
        distance_km: Some(distance_km),
        duration_min,
        target_pace,
        details: workout_details(workout, state, distance, distance_km),
        intensity_score,
    }
}

/// Phase- and type-specific workout description. Deterministic for a given
/// input so schedules are testable.
fn workout_details(
    workout: WorkoutType,
    state: &PhaseState,
    distance: RaceDistance,
    km: f64,
) -> String {
    match workout {
        WorkoutType::LongRun => long_run_details(state.race_phase, distance, km),
        WorkoutType::Recovery => format!("Recovery run: {km:.1} km at a very relaxed pace."),
        WorkoutType::Easy => format!("Easy run: {km:.1} km at a comfortable, steady pace."),
        WorkoutType::Threshold => threshold_details(state.race_phase, km),
        WorkoutType::Intervals => intervals_details(state.race_phase, distance, km),
        WorkoutType::Rest | WorkoutType::ActiveRecovery | WorkoutType::StrengthTraining => {
            rest_day_details(workout).to_owned()
        }
    }
}

fn long_run_details(phase: RacePhase, distance: RaceDistance, km: f64) -> String {
    match phase {
        RacePhase::Base => {
            format!("Long run: {km:.1} km at an easy, conversational pace to build endurance.")
        }
        RacePhase::Build => {
            format!("Long run: {km:.1} km with the last 3-5 km at marathon pace.")
        }
        RacePhase::Peak => {
            if distance == RaceDistance::Marathon {
                let middle = (km * 0.5).round();
                format!("Long run: {km:.1} km with the middle {middle:.1} km at race pace.")
            } else {
                format!("Long run: {km:.1} km with a progressive effort, finishing strong.")
            }
        }
        RacePhase::Taper => format!("Shorter long run: {km:.1} km at an easy pace."),
    }
}

fn threshold_details(phase: RacePhase, km: f64) -> String {
    match phase {
        RacePhase::Base => {
            format!("Threshold: {km:.1} km including 2-3 x 5 min at threshold pace.")
        }
        RacePhase::Build => format!("Threshold: {km:.1} km with 20 minutes at threshold pace."),
        RacePhase::Peak => format!("Threshold: {km:.1} km with 2 x 15 min at threshold pace."),
        RacePhase::Taper => format!("Threshold: {km:.1} km with 10 minutes at threshold pace."),
    }
}

fn intervals_details(phase: RacePhase, distance: RaceDistance, km: f64) -> String {
    if distance.is_short_course() {
        match phase {
            RacePhase::Base => format!("Intervals: {km:.1} km with 6-8 x 400m at 5K effort."),
            RacePhase::Build => format!("Intervals: {km:.1} km with 5-6 x 800m at 5K effort."),
            RacePhase::Peak => format!("Intervals: {km:.1} km with 5 x 1000m at 5K effort."),
            RacePhase::Taper => format!("Intervals: {km:.1} km with 3-4 x 400m at 5K effort."),
        }
    } else {
        match phase {
            RacePhase::Build => format!("Intervals: {km:.1} km with 6-8 x 400m at 10K effort."),
            RacePhase::Peak => format!("Intervals: {km:.1} km with 3-4 x 1 mile at 10K effort."),
            RacePhase::Base | RacePhase::Taper => {
                format!("Intervals: {km:.1} km with 4-5 x 400m at 10K effort.")
            }
        }
    }
}

/// Description for rest-day variants
fn rest_day_details(workout: WorkoutType) -> &'static str {
    match workout {
        WorkoutType::ActiveRecovery => {
            "Light activity such as walking, stretching, or easy cycling for 20-30 minutes."
        }
        WorkoutType::StrengthTraining => {
            "Running-specific strength exercises for 30-45 minutes."
        }
        _ => "Complete rest day to allow full recovery.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::models::RacePrediction;

    fn state(phase: RacePhase) -> PhaseState {
        PhaseState {
            total_weeks: 12,
            current_week: 4,
            weeks_until_race: 8,
            race_phase: phase,
            weekly_mileage_km: 40.0,
        }
    }

    fn paces() -> PaceTable {
        // 22:00 5K -> base 264 s/km: easy 303.6 -> "5:04", threshold 274.56 -> "4:35"
        PaceTable::derive(RacePrediction::new(1320.0).unwrap(), RaceDistance::FiveK).unwrap()
    }

    #[test]
    fn test_rest_day_has_no_load() {
        let entry = compose(
            Weekday::Monday,
            WorkoutType::Rest,
            &state(RacePhase::Build),
            &paces(),
            RaceDistance::FiveK,
        );
        assert_eq!(entry.distance_km, None);
        assert_eq!(entry.duration_min, None);
        assert_eq!(entry.target_pace, None);
        assert_eq!(entry.intensity_score, 0);
        assert_eq!(entry.details, "Complete rest day to allow full recovery.");
    }

    #[test]
    fn test_easy_run_composition() {
        let entry = compose(
            Weekday::Tuesday,
            WorkoutType::Easy,
            &state(RacePhase::Build),
            &paces(),
            RaceDistance::FiveK,
        );
        // 40 km * 0.15 = 6.0 km at 5:04/km.
        assert_eq!(entry.distance_km, Some(6.0));
        assert_eq!(entry.target_pace.as_deref(), Some("5:04 per km"));
        // 6.0 * (304/60) = 30.4 -> 30 minutes.
        assert_eq!(entry.duration_min, Some(30));
        // 6.0 * 0.8 * (304/60) = 24.32 -> 24.
        assert_eq!(entry.intensity_score, 24);
        assert!(entry.details.contains("Easy run: 6.0 km"));
    }

    #[test]
    fn test_intervals_have_no_pace_or_duration() {
        let entry = compose(
            Weekday::Wednesday,
            WorkoutType::Intervals,
            &state(RacePhase::Peak),
            &paces(),
            RaceDistance::FiveK,
        );
        assert_eq!(entry.distance_km, Some(4.0));
        assert_eq!(entry.duration_min, None);
        assert_eq!(entry.target_pace, None);
        assert_eq!(entry.intensity_score, 0);
        assert_eq!(entry.details, "Intervals: 4.0 km with 5 x 1000m at 5K effort.");
    }

    #[test]
    fn test_long_run_factor_by_phase() {
        // Base ramps up from 0.25; build drifts down from 0.30; peak constant.
        let base = long_run_factor(RacePhase::Base, 1, 12);
        assert!(base > 0.25 && base < 0.30);
        assert!(long_run_factor(RacePhase::Base, 3, 12) > base);

        let build = long_run_factor(RacePhase::Build, 6, 12);
        assert!(build < 0.30 && build > 0.28);

        assert!((long_run_factor(RacePhase::Peak, 10, 12) - 0.28).abs() < 1e-9);

        let taper = long_run_factor(RacePhase::Taper, 12, 12);
        assert!(taper < 0.20);
    }

    #[test]
    fn test_long_run_factor_clamped_on_short_plans() {
        // A 2-week plan at week 8 drives the raw taper ramp negative.
        let f = long_run_factor(RacePhase::Taper, 8, 2);
        assert!((0.05..=0.35).contains(&f));
    }

    #[test]
    fn test_peak_marathon_long_run_mentions_race_pace_middle() {
        let mut s = state(RacePhase::Peak);
        s.weekly_mileage_km = 80.0;
        let entry = compose(
            Weekday::Sunday,
            WorkoutType::LongRun,
            &s,
            &paces(),
            RaceDistance::Marathon,
        );
        // 80 * 0.28 = 22.4 km, middle = round(11.2) = 11.0.
        assert_eq!(
            entry.details,
            "Long run: 22.4 km with the middle 11.0 km at race pace."
        );
    }

    #[test]
    fn test_details_are_deterministic() {
        let a = compose(
            Weekday::Thursday,
            WorkoutType::Threshold,
            &state(RacePhase::Build),
            &paces(),
            RaceDistance::TenK,
        );
        let b = compose(
            Weekday::Thursday,
            WorkoutType::Threshold,
            &state(RacePhase::Build),
            &paces(),
            RaceDistance::TenK,
        );
        assert_eq!(a.details, b.details);
        assert_eq!(a.details, "Threshold: 4.8 km with 20 minutes at threshold pace.");
    }
}
