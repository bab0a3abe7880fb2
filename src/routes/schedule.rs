// ABOUTME: Route handlers for the weekly-schedule REST API
// ABOUTME: Request parsing, goal construction, and delegation to the schedule service
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schedule routes.
//!
//! `POST /api/schedule` takes the runner's goal as JSON and returns the
//! generated week. Field validation failures come back as 400s with the
//! structured error body; a missing upstream prediction is a 404 so clients
//! can prompt a device re-sync.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use strider_core::models::{
    ExperienceLevel, PhaseSelection, RaceDistance, TrainingGoal, TrainingObjective, Weekday,
};
use strider_core::{AppError, AppResult};

use crate::services::ScheduleService;
use crate::ServerResources;

/// Request payload for schedule generation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Target race distance
    pub training_distance: RaceDistance,
    /// Race day, ISO `YYYY-MM-DD`
    pub race_date: String,
    /// Running days per week, 1 to 7
    pub run_days: u8,
    /// Weekday reserved for the long run
    pub long_run_day: String,
    /// Requested phase; omitted means automatic resolution
    pub race_phase: Option<String>,
    /// Current weekly mileage in km, overriding the derived target
    pub current_mileage: Option<f64>,
    /// Runner experience level
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Training objective
    #[serde(default)]
    pub training_goal: TrainingObjective,
    /// Suggest active-recovery and strength work on rest days
    #[serde(default)]
    pub rest_day_variety: bool,
}

impl ScheduleRequest {
    /// Parse the string-typed fields and build the engine goal.
    ///
    /// # Errors
    ///
    /// - `InvalidDateError` for an unparseable `raceDate`
    /// - `ConfigError` for an unknown `longRunDay` or `racePhase`
    pub fn into_goal(self) -> AppResult<TrainingGoal> {
        let race_date = NaiveDate::parse_from_str(&self.race_date, "%Y-%m-%d").map_err(|_| {
            AppError::invalid_date(format!(
                "Invalid raceDate '{}'. Expected YYYY-MM-DD",
                self.race_date
            ))
        })?;
        let long_run_day = Weekday::from_str(&self.long_run_day)?;
        let phase = match self.race_phase.as_deref() {
            Some(raw) => PhaseSelection::from_str(raw)?,
            None => PhaseSelection::Auto,
        };

        let goal = TrainingGoal {
            distance: self.training_distance,
            race_date,
            experience_level: self.experience_level,
            objective: self.training_goal,
            run_days_per_week: self.run_days,
            long_run_day,
            phase,
            current_weekly_mileage_km: self.current_mileage,
            rest_day_variety: self.rest_day_variety,
        };
        goal.validate()?;
        Ok(goal)
    }
}

/// Schedule routes handler
pub struct ScheduleRoutes;

impl ScheduleRoutes {
    /// Create all schedule routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/schedule", post(Self::handle_generate))
            .with_state(resources)
    }

    /// Handle POST /api/schedule
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ScheduleRequest>,
    ) -> Result<Response, AppError> {
        let goal = request.into_goal()?;

        let service = ScheduleService::new(
            resources.cache.clone(),
            Arc::clone(&resources.provider),
            resources.config.cache.schedule_ttl,
        );
        let week = service
            .weekly_schedule(&goal, Utc::now().date_naive())
            .await?;

        Ok((StatusCode::OK, Json(week)).into_response())
    }
}
