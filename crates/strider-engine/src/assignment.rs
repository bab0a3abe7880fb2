// ABOUTME: Day assigner - places the week's workout types onto specific weekdays
// ABOUTME: Long-run day fixed, rest days prefer Monday/Friday, remainder filled in week order
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout-type selection and weekday placement.
//!
//! Selection reads an immutable rule table keyed by `(phase, run day count)`;
//! every row carries exactly one long run by construction. Placement then pins
//! the long run to its fixed weekday, assigns rest days (Monday and Friday
//! first when at least two are needed, then from the end of the week
//! backwards), and deals the remaining workout types across the leftover days
//! in Monday-to-Sunday order, padding with easy runs if the row runs short.

use strider_core::models::{RacePhase, Weekday, WorkoutType, WEEK};
use strider_core::{AppError, AppResult};

use WorkoutType::{Easy, Intervals, LongRun, Recovery, Rest, Threshold};

/// One rule-table row: phase, run-day count, workout multiset
type Row = (RacePhase, u8, &'static [WorkoutType]);

/// Phase-aware workout rules. Base and taper weeks stay aerobic; build weeks
/// add a threshold session from three run days up; peak weeks add intervals
/// and, at high day counts, a dedicated recovery run.
static WORKOUT_RULES: &[Row] = &[
    (RacePhase::Base, 1, &[LongRun]),
    (RacePhase::Base, 2, &[LongRun, Easy]),
    (RacePhase::Base, 3, &[LongRun, Easy, Easy]),
    (RacePhase::Base, 4, &[LongRun, Easy, Easy, Easy]),
    (RacePhase::Base, 5, &[LongRun, Easy, Easy, Easy, Easy]),
    (RacePhase::Base, 6, &[LongRun, Easy, Easy, Easy, Easy, Easy]),
    (RacePhase::Base, 7, &[LongRun, Easy, Easy, Easy, Easy, Easy, Easy]),
    (RacePhase::Build, 1, &[LongRun]),
    (RacePhase::Build, 2, &[LongRun, Easy]),
    (RacePhase::Build, 3, &[LongRun, Easy, Threshold]),
    (RacePhase::Build, 4, &[LongRun, Easy, Easy, Threshold]),
    (RacePhase::Build, 5, &[LongRun, Easy, Easy, Threshold, Easy]),
    (RacePhase::Build, 6, &[LongRun, Easy, Easy, Threshold, Easy, Easy]),
    (RacePhase::Build, 7, &[LongRun, Easy, Easy, Threshold, Easy, Easy, Easy]),
    (RacePhase::Peak, 1, &[LongRun]),
    (RacePhase::Peak, 2, &[LongRun, Easy]),
    (RacePhase::Peak, 3, &[LongRun, Easy, Intervals]),
    (RacePhase::Peak, 4, &[LongRun, Easy, Intervals, Threshold]),
    (RacePhase::Peak, 5, &[LongRun, Easy, Intervals, Threshold, Easy]),
    (RacePhase::Peak, 6, &[LongRun, Easy, Intervals, Threshold, Easy, Recovery]),
    (RacePhase::Peak, 7, &[LongRun, Easy, Intervals, Threshold, Easy, Recovery, Easy]),
    (RacePhase::Taper, 1, &[LongRun]),
    (RacePhase::Taper, 2, &[LongRun, Easy]),
    (RacePhase::Taper, 3, &[LongRun, Easy, Easy]),
    (RacePhase::Taper, 4, &[LongRun, Easy, Easy, Easy]),
    (RacePhase::Taper, 5, &[LongRun, Easy, Easy, Easy, Easy]),
    (RacePhase::Taper, 6, &[LongRun, Easy, Easy, Easy, Easy, Easy]),
    (RacePhase::Taper, 7, &[LongRun, Easy, Easy, Easy, Easy, Easy, Easy]),
];

/// Rest days claim Monday and Friday first when at least two are needed
const PREFERRED_REST_DAYS: [Weekday; 2] = [Weekday::Monday, Weekday::Friday];

/// A full week of workout-type assignments in Monday-to-Sunday order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekAssignment {
    days: [WorkoutType; 7],
}

impl WeekAssignment {
    /// Workout type assigned to a weekday
    #[must_use]
    pub fn workout_for(&self, day: Weekday) -> WorkoutType {
        self.days[day.index()]
    }

    /// Iterate assignments in canonical week order
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, WorkoutType)> + '_ {
        WEEK.iter().map(|&day| (day, self.days[day.index()]))
    }

    /// Upgrade plain rest days to suggested activities: a rest day directly
    /// after a run becomes active recovery, otherwise even weekday indexes get
    /// strength work. All variants still count as rest days.
    pub fn apply_rest_variety(&mut self) {
        let runs: Vec<bool> = self.days.iter().map(|t| t.is_run()).collect();
        for day in WEEK {
            let idx = day.index();
            if self.days[idx] != Rest {
                continue;
            }
            if runs[day.previous().index()] {
                self.days[idx] = WorkoutType::ActiveRecovery;
            } else if idx % 2 == 0 {
                self.days[idx] = WorkoutType::StrengthTraining;
            }
        }
    }
}

/// Select the workout-type multiset for a phase and run-day count. Unknown
/// combinations fall back to a long run plus easy runs.
#[must_use]
pub fn workout_types(phase: RacePhase, run_days: u8) -> Vec<WorkoutType> {
    WORKOUT_RULES
        .iter()
        .find(|(p, n, _)| *p == phase && *n == run_days)
        .map_or_else(
            || {
                let mut types = vec![LongRun];
                types.resize(usize::from(run_days.max(1)), Easy);
                types
            },
            |(_, _, row)| row.to_vec(),
        )
}

/// Assign workout types to weekdays.
///
/// Guarantees exactly seven entries, exactly one long run (on
/// `long_run_day`), and `7 - run_days` rest days.
///
/// # Errors
///
/// Returns `ConfigError` if `run_days` is outside 1..=7.
pub fn assign(
    phase: RacePhase,
    run_days: u8,
    long_run_day: Weekday,
) -> AppResult<WeekAssignment> {
    if !(1..=7).contains(&run_days) {
        return Err(AppError::config(format!(
            "runDays must be between 1 and 7, got {run_days}"
        )));
    }

    let types = workout_types(phase, run_days);
    let mut days: [Option<WorkoutType>; 7] = [None; 7];
    days[long_run_day.index()] = Some(LongRun);

    let rest_needed = usize::from(7 - run_days);
    let mut available: Vec<Weekday> = WEEK
        .iter()
        .copied()
        .filter(|&d| d != long_run_day)
        .collect();
    let mut rest_days: Vec<Weekday> = Vec::with_capacity(rest_needed);

    if rest_needed >= 2 {
        for preferred in PREFERRED_REST_DAYS {
            if rest_days.len() < rest_needed && available.contains(&preferred) {
                rest_days.push(preferred);
                available.retain(|&d| d != preferred);
            }
        }
    }
    // Fill remaining rest slots from the end of the week backwards.
    while rest_days.len() < rest_needed {
        match available.pop() {
            Some(day) => rest_days.push(day),
            None => break,
        }
    }
    for &day in &rest_days {
        days[day.index()] = Some(Rest);
    }

    // Remaining days take the non-long-run types in table order, week order.
    let mut remaining_types = types.iter().copied().filter(|&t| t != LongRun);
    for day in WEEK {
        if days[day.index()].is_none() {
            days[day.index()] = Some(remaining_types.next().unwrap_or(Easy));
        }
    }

    let days = days.map(|slot| slot.unwrap_or(Rest));
    Ok(WeekAssignment { days })
}
