// ABOUTME: Workout type taxonomy for scheduled training days
// ABOUTME: Distinguishes running workouts from rest-day variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of workout assigned to a day.
///
/// Running types carry a distance, pace, and intensity score; rest-day types
/// (`Rest`, `ActiveRecovery`, `StrengthTraining`) carry none of those and
/// always score zero intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Very relaxed short run
    Recovery,
    /// Comfortable steady run
    Easy,
    /// Lactate-threshold stimulus
    Threshold,
    /// VO2max stimulus
    Intervals,
    /// The week's single longest run, anchored to a fixed weekday
    LongRun,
    /// Complete rest
    Rest,
    /// Walking, stretching, or easy cycling
    #[serde(rename = "Active Recovery")]
    ActiveRecovery,
    /// Running-specific strength work
    #[serde(rename = "Strength Training")]
    StrengthTraining,
}

impl WorkoutType {
    /// Whether this day involves running
    #[must_use]
    pub const fn is_run(self) -> bool {
        !self.is_rest_day()
    }

    /// Whether this is a rest day (including active-recovery variants)
    #[must_use]
    pub const fn is_rest_day(self) -> bool {
        matches!(self, Self::Rest | Self::ActiveRecovery | Self::StrengthTraining)
    }

    /// Per-type weighting used in the intensity score
    #[must_use]
    pub const fn intensity_factor(self) -> f64 {
        match self {
            Self::Recovery => 0.7,
            Self::Easy => 0.8,
            Self::Threshold => 1.0,
            Self::Intervals => 1.2,
            Self::LongRun => 0.85,
            Self::Rest | Self::ActiveRecovery | Self::StrengthTraining => 0.0,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Recovery => "Recovery",
            Self::Easy => "Easy",
            Self::Threshold => "Threshold",
            Self::Intervals => "Intervals",
            Self::LongRun => "LongRun",
            Self::Rest => "Rest",
            Self::ActiveRecovery => "Active Recovery",
            Self::StrengthTraining => "Strength Training",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_day_classification() {
        assert!(WorkoutType::Rest.is_rest_day());
        assert!(WorkoutType::ActiveRecovery.is_rest_day());
        assert!(WorkoutType::StrengthTraining.is_rest_day());
        assert!(WorkoutType::LongRun.is_run());
        assert!(WorkoutType::Easy.is_run());
    }

    #[test]
    fn test_serde_names_match_wire_format() {
        assert_eq!(
            serde_json::to_string(&WorkoutType::ActiveRecovery).unwrap(),
            "\"Active Recovery\""
        );
        assert_eq!(
            serde_json::to_string(&WorkoutType::LongRun).unwrap(),
            "\"LongRun\""
        );
    }
}
