// ABOUTME: Race parameter enums - distance, phase, experience level, objective
// ABOUTME: Carries the per-distance plan-length and mileage base tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Target race distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceDistance {
    #[serde(rename = "5K")]
    FiveK,
    #[serde(rename = "10K")]
    TenK,
    HalfMarathon,
    Marathon,
}

impl RaceDistance {
    /// Race distance in kilometers
    #[must_use]
    pub const fn distance_km(self) -> f64 {
        match self {
            Self::FiveK => 5.0,
            Self::TenK => 10.0,
            Self::HalfMarathon => 21.1,
            Self::Marathon => 42.2,
        }
    }

    /// Recommended plan length in weeks, before experience adjustment
    #[must_use]
    pub const fn base_plan_weeks(self) -> u32 {
        match self {
            Self::FiveK => 12,
            Self::TenK => 16,
            Self::HalfMarathon => 20,
            Self::Marathon => 24,
        }
    }

    /// Default weekly mileage in km, before experience/objective adjustment
    #[must_use]
    pub const fn base_weekly_mileage_km(self) -> f64 {
        match self {
            Self::FiveK => 40.0,
            Self::TenK => 56.0,
            Self::HalfMarathon => 72.0,
            Self::Marathon => 88.0,
        }
    }

    /// Short-distance races get 5K-effort interval prescriptions; longer races
    /// get 10K-effort ones.
    #[must_use]
    pub const fn is_short_course(self) -> bool {
        matches!(self, Self::FiveK | Self::TenK)
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "HalfMarathon",
            Self::Marathon => "Marathon",
        };
        f.write_str(name)
    }
}

/// Training phase within a race build-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RacePhase {
    /// Aerobic foundation
    Base,
    /// Quality and volume increase
    Build,
    /// Highest load before taper
    Peak,
    /// Pre-race volume reduction
    Taper,
}

impl fmt::Display for RacePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
        };
        f.write_str(name)
    }
}

/// Requested phase: either a fixed phase or automatic resolution from the
/// weeks remaining until race day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseSelection {
    Auto,
    Base,
    Build,
    Peak,
    Taper,
}

impl PhaseSelection {
    /// The fixed phase, or `None` for automatic resolution
    #[must_use]
    pub const fn fixed(self) -> Option<RacePhase> {
        match self {
            Self::Auto => None,
            Self::Base => Some(RacePhase::Base),
            Self::Build => Some(RacePhase::Build),
            Self::Peak => Some(RacePhase::Peak),
            Self::Taper => Some(RacePhase::Taper),
        }
    }
}

impl FromStr for PhaseSelection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "base" => Ok(Self::Base),
            "build" => Ok(Self::Build),
            "peak" => Ok(Self::Peak),
            "taper" => Ok(Self::Taper),
            other => Err(AppError::config(format!(
                "Invalid racePhase '{other}'. Must be one of: auto, base, build, peak, taper"
            ))),
        }
    }
}

/// Runner experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Plan-length multiplier. Advanced runners need a slightly shorter
    /// build-up for the same race.
    #[must_use]
    pub const fn plan_length_multiplier(self) -> f64 {
        match self {
            Self::Beginner | Self::Intermediate => 1.0,
            Self::Advanced => 0.9,
        }
    }

    /// Weekly mileage multiplier
    #[must_use]
    pub const fn mileage_factor(self) -> f64 {
        match self {
            Self::Beginner => 0.8,
            Self::Intermediate => 1.0,
            Self::Advanced => 1.2,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(name)
    }
}

/// What the runner wants out of the race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingObjective {
    /// Complete the distance comfortably
    Finish,
    /// Chase a personal record
    #[default]
    #[serde(rename = "pr")]
    PersonalRecord,
    /// Race for placement
    Compete,
}

impl TrainingObjective {
    /// Weekly mileage multiplier
    #[must_use]
    pub const fn mileage_factor(self) -> f64 {
        match self {
            Self::Finish => 0.9,
            Self::PersonalRecord => 1.0,
            Self::Compete => 1.1,
        }
    }
}

impl fmt::Display for TrainingObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Finish => "finish",
            Self::PersonalRecord => "pr",
            Self::Compete => "compete",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_serde_names() {
        assert_eq!(
            serde_json::to_string(&RaceDistance::FiveK).unwrap(),
            "\"5K\""
        );
        let d: RaceDistance = serde_json::from_str("\"HalfMarathon\"").unwrap();
        assert_eq!(d, RaceDistance::HalfMarathon);
    }

    #[test]
    fn test_phase_selection_parse() {
        assert_eq!(
            "AUTO".parse::<PhaseSelection>().unwrap(),
            PhaseSelection::Auto
        );
        assert_eq!(
            "taper".parse::<PhaseSelection>().unwrap().fixed(),
            Some(RacePhase::Taper)
        );
        assert!("race".parse::<PhaseSelection>().is_err());
    }

    #[test]
    fn test_objective_default_is_pr() {
        assert_eq!(
            TrainingObjective::default(),
            TrainingObjective::PersonalRecord
        );
        let o: TrainingObjective = serde_json::from_str("\"pr\"").unwrap();
        assert_eq!(o, TrainingObjective::PersonalRecord);
    }
}
