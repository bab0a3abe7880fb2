// ABOUTME: Phase planner - resolves race phase, plan length, and weekly mileage target
// ABOUTME: Pure derivation from the training goal and today's date
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Race phase resolution and weekly mileage planning.
//!
//! Weekly mileage combines three layers: a per-distance default adjusted for
//! experience and objective, a phase multiplier that ramps linearly inside
//! each phase, and a four-week microcycle (deload every 4th week, peak load
//! the week before). The phase ramps are clamped to [0.5, 1.3]: the raw
//! linear functions can leave that band at extreme week/total-week ratios on
//! very short plans, and an unbounded multiplier is never a useful
//! prescription.

use chrono::NaiveDate;
use strider_core::models::{RacePhase, TrainingGoal};

/// Multiplier clamp band for the phase ramps
const PHASE_MULTIPLIER_MIN: f64 = 0.5;
const PHASE_MULTIPLIER_MAX: f64 = 1.3;

/// Derived phase state for one schedule request. Computed once, immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    /// Total plan length in weeks
    pub total_weeks: u32,
    /// 1-indexed week within the plan, clamped to at least 1
    pub current_week: u32,
    /// Whole weeks remaining until race day, clamped to zero
    pub weeks_until_race: u32,
    /// Resolved training phase
    pub race_phase: RacePhase,
    /// Target weekly mileage in km
    pub weekly_mileage_km: f64,
}

/// Plan the phase state for a goal as of `today`.
///
/// A race date in the past is not an error: `weeks_until_race` clamps to zero
/// and automatic phase resolution lands on taper, treating the runner as being
/// at race day.
#[must_use]
pub fn plan(goal: &TrainingGoal, today: NaiveDate) -> PhaseState {
    let days_until_race = (goal.race_date - today).num_days();
    let weeks_until_race = u32::try_from(days_until_race.div_euclid(7)).unwrap_or(0);

    let total_weeks = plan_length_weeks(goal);
    let current_week = total_weeks.saturating_sub(weeks_until_race).max(1);

    let race_phase = goal
        .phase
        .fixed()
        .unwrap_or_else(|| resolve_phase(weeks_until_race));

    let weekly_mileage_km = goal.current_weekly_mileage_km.unwrap_or_else(|| {
        default_weekly_mileage(goal)
            * phase_multiplier(race_phase, current_week, total_weeks)
            * microcycle_multiplier(current_week)
    });

    PhaseState {
        total_weeks,
        current_week,
        weeks_until_race,
        race_phase,
        weekly_mileage_km,
    }
}

/// Recommended plan length in weeks for a distance and experience level
#[must_use]
pub fn plan_length_weeks(goal: &TrainingGoal) -> u32 {
    let base = f64::from(goal.distance.base_plan_weeks());
    (base * goal.experience_level.plan_length_multiplier()).round() as u32
}

/// Resolve the race phase from the weeks remaining until race day:
/// more than 10 weeks is base, 6 to 10 is build, 3 to 5 is peak, under 3 is
/// taper. Ranges are inclusive on both ends; no week falls in two buckets.
#[must_use]
pub fn resolve_phase(weeks_until_race: u32) -> RacePhase {
    match weeks_until_race {
        w if w > 10 => RacePhase::Base,
        6..=10 => RacePhase::Build,
        3..=5 => RacePhase::Peak,
        _ => RacePhase::Taper,
    }
}

/// Default weekly mileage before phase modulation: per-distance base adjusted
/// for experience and objective
#[must_use]
pub fn default_weekly_mileage(goal: &TrainingGoal) -> f64 {
    goal.distance.base_weekly_mileage_km()
        * goal.experience_level.mileage_factor()
        * goal.objective.mileage_factor()
}

/// Phase-dependent mileage multiplier. Each phase ramps linearly across its
/// nominal slice of the plan (base ends at 30%, build at 80%, peak at 90%,
/// taper at 100%); the result is clamped to [0.5, 1.3].
#[must_use]
pub fn phase_multiplier(phase: RacePhase, current_week: u32, total_weeks: u32) -> f64 {
    let week = f64::from(current_week);
    let total = f64::from(total_weeks.max(1));

    let raw = match phase {
        RacePhase::Base => 0.8 + 0.2 * week / (total * 0.3),
        RacePhase::Build => 0.9 + 0.3 * (week - total * 0.3) / (total * 0.5),
        RacePhase::Peak => 1.1 + 0.1 * (week - total * 0.8) / (total * 0.1),
        RacePhase::Taper => 1.2 - 0.4 * (week - total * 0.9) / (total * 0.1),
    };

    raw.clamp(PHASE_MULTIPLIER_MIN, PHASE_MULTIPLIER_MAX)
}

/// Four-week microcycle: every 4th week deloads to 80%, the week before peaks
/// at 110%
#[must_use]
pub fn microcycle_multiplier(current_week: u32) -> f64 {
    match current_week % 4 {
        0 => 0.8,
        3 => 1.1,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::models::{
        ExperienceLevel, PhaseSelection, RaceDistance, TrainingObjective, Weekday,
    };

    fn goal(distance: RaceDistance, weeks_out: i64) -> TrainingGoal {
        let today = today();
        TrainingGoal {
            distance,
            race_date: today + chrono::Duration::weeks(weeks_out),
            experience_level: ExperienceLevel::Intermediate,
            objective: TrainingObjective::PersonalRecord,
            run_days_per_week: 4,
            long_run_day: Weekday::Sunday,
            phase: PhaseSelection::Auto,
            current_weekly_mileage_km: None,
            rest_day_variety: false,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn test_phase_rule_buckets() {
        assert_eq!(resolve_phase(11), RacePhase::Base);
        assert_eq!(resolve_phase(10), RacePhase::Build);
        assert_eq!(resolve_phase(6), RacePhase::Build);
        assert_eq!(resolve_phase(5), RacePhase::Peak);
        assert_eq!(resolve_phase(3), RacePhase::Peak);
        assert_eq!(resolve_phase(2), RacePhase::Taper);
        assert_eq!(resolve_phase(0), RacePhase::Taper);
    }

    #[test]
    fn test_plan_length_table() {
        assert_eq!(plan_length_weeks(&goal(RaceDistance::FiveK, 8)), 12);
        assert_eq!(plan_length_weeks(&goal(RaceDistance::TenK, 8)), 16);
        assert_eq!(plan_length_weeks(&goal(RaceDistance::HalfMarathon, 8)), 20);
        assert_eq!(plan_length_weeks(&goal(RaceDistance::Marathon, 8)), 24);

        let mut advanced = goal(RaceDistance::Marathon, 8);
        advanced.experience_level = ExperienceLevel::Advanced;
        assert_eq!(plan_length_weeks(&advanced), 22); // 24 * 0.9 rounded
    }

    #[test]
    fn test_default_mileage_factors() {
        let mut g = goal(RaceDistance::FiveK, 8);
        assert!((default_weekly_mileage(&g) - 40.0).abs() < 1e-9);

        g.experience_level = ExperienceLevel::Beginner;
        g.objective = TrainingObjective::Finish;
        assert!((default_weekly_mileage(&g) - 40.0 * 0.8 * 0.9).abs() < 1e-9);

        g.experience_level = ExperienceLevel::Advanced;
        g.objective = TrainingObjective::Compete;
        assert!((default_weekly_mileage(&g) - 40.0 * 1.2 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_phase_multiplier_is_clamped() {
        // Very short plan pushes the raw taper ramp far below the band.
        for phase in [
            RacePhase::Base,
            RacePhase::Build,
            RacePhase::Peak,
            RacePhase::Taper,
        ] {
            for week in 1..=30 {
                let m = phase_multiplier(phase, week, 4);
                assert!((0.5..=1.3).contains(&m), "{phase} week {week}: {m}");
            }
        }
    }

    #[test]
    fn test_base_ramp_increases() {
        let early = phase_multiplier(RacePhase::Base, 1, 20);
        let late = phase_multiplier(RacePhase::Base, 5, 20);
        assert!(late > early);
    }

    #[test]
    fn test_microcycle() {
        assert!((microcycle_multiplier(4) - 0.8).abs() < 1e-9);
        assert!((microcycle_multiplier(8) - 0.8).abs() < 1e-9);
        assert!((microcycle_multiplier(3) - 1.1).abs() < 1e-9);
        assert!((microcycle_multiplier(7) - 1.1).abs() < 1e-9);
        assert!((microcycle_multiplier(1) - 1.0).abs() < 1e-9);
        assert!((microcycle_multiplier(2) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_current_week_clamps_to_one() {
        // Race far in the future: more weeks remain than the plan holds.
        let state = plan(&goal(RaceDistance::FiveK, 40), today());
        assert_eq!(state.current_week, 1);
        assert_eq!(state.race_phase, RacePhase::Base);
    }

    #[test]
    fn test_past_race_date_clamps() {
        let state = plan(&goal(RaceDistance::FiveK, -3), today());
        assert_eq!(state.weeks_until_race, 0);
        assert_eq!(state.race_phase, RacePhase::Taper);
        assert_eq!(state.current_week, 12);
    }

    #[test]
    fn test_fixed_phase_overrides_auto() {
        let mut g = goal(RaceDistance::FiveK, 8);
        g.phase = PhaseSelection::Base;
        let state = plan(&g, today());
        assert_eq!(state.race_phase, RacePhase::Base);
    }

    #[test]
    fn test_mileage_override_skips_modulation() {
        let mut g = goal(RaceDistance::FiveK, 8);
        g.current_weekly_mileage_km = Some(55.5);
        let state = plan(&g, today());
        assert!((state.weekly_mileage_km - 55.5).abs() < f64::EPSILON);
    }
}
