// ABOUTME: Race-prediction provider abstraction and implementations
// ABOUTME: Upstream source of predicted race times from a wearable account
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Race-prediction providers.
//!
//! The engine only ever consumes a plain [`RacePrediction`] value; everything
//! about talking to the wearable-device account lives behind this trait. A
//! missing prediction for the requested distance is a distinct
//! `PredictionUnavailable` error so the caller can prompt a device re-sync
//! instead of retrying blindly.

/// Wearable-account HTTP provider
pub mod wearable;

use std::collections::HashMap;

use strider_core::models::{RaceDistance, RacePrediction};
use strider_core::{AppError, AppResult};

pub use wearable::WearablePredictionsClient;

/// Upstream source of race-time predictions
#[async_trait::async_trait]
pub trait RacePredictionProvider: Send + Sync {
    /// Fetch the predicted finish time for a race distance.
    ///
    /// # Errors
    ///
    /// - `PredictionUnavailable` when the account has no prediction for the
    ///   requested distance
    /// - `ExternalServiceError` when the upstream call itself fails
    async fn race_prediction(&self, distance: RaceDistance) -> AppResult<RacePrediction>;
}

/// Fixed in-memory predictions, for tests and local development
#[derive(Debug, Clone, Default)]
pub struct StaticPredictions {
    predictions: HashMap<RaceDistance, f64>,
}

impl StaticPredictions {
    /// Create an empty prediction set (every lookup is unavailable)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicted finish time in seconds for a distance
    #[must_use]
    pub fn with_prediction(mut self, distance: RaceDistance, seconds: f64) -> Self {
        self.predictions.insert(distance, seconds);
        self
    }
}

#[async_trait::async_trait]
impl RacePredictionProvider for StaticPredictions {
    async fn race_prediction(&self, distance: RaceDistance) -> AppResult<RacePrediction> {
        let seconds = self.predictions.get(&distance).copied().ok_or_else(|| {
            AppError::prediction_unavailable(format!("no race prediction for {distance}"))
        })?;
        RacePrediction::new(seconds)
    }
}
