// ABOUTME: Core domain models for the Strider training-plan service
// ABOUTME: Weekdays, race parameters, workout types, goals, and schedule outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data models
//!
//! All types here are plain immutable values: a schedule request constructs
//! them once, the engine consumes them, and nothing is mutated afterwards.

/// Canonical weekday type with Monday-first ordering
pub mod week;

/// Race distances, phases, experience levels, and training objectives
pub mod race;

/// Workout type taxonomy
pub mod workout;

/// Schedule request inputs (training goal, race prediction)
pub mod goal;

/// Schedule outputs (day entries, weekly summary)
pub mod schedule;

pub use goal::{RacePrediction, TrainingGoal};
pub use race::{ExperienceLevel, PhaseSelection, RaceDistance, RacePhase, TrainingObjective};
pub use schedule::{DaySchedule, WeekSummary, WeeklySchedule};
pub use week::{Weekday, WEEK};
pub use workout::WorkoutType;
