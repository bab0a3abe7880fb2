// ABOUTME: HTTP client for the wearable-account race-predictions API
// ABOUTME: Fetches predicted finish times and maps upstream failures to app errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use strider_core::models::{RaceDistance, RacePrediction};
use strider_core::{AppError, AppResult};

use super::RacePredictionProvider;
use crate::config::PredictionProviderConfig;

/// Upstream request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Name used when reporting upstream failures
const SERVICE_NAME: &str = "race-predictions";

/// Race-predictions payload as the wearable API reports it.
///
/// Each field is the predicted finish time in seconds; a field is absent when
/// the account has not synced enough activity data for that distance.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictionsPayload {
    #[serde(rename = "time5K")]
    time_5k: Option<f64>,
    #[serde(rename = "time10K")]
    time_10k: Option<f64>,
    time_half_marathon: Option<f64>,
    time_marathon: Option<f64>,
}

impl PredictionsPayload {
    fn seconds_for(&self, distance: RaceDistance) -> Option<f64> {
        match distance {
            RaceDistance::FiveK => self.time_5k,
            RaceDistance::TenK => self.time_10k,
            RaceDistance::HalfMarathon => self.time_half_marathon,
            RaceDistance::Marathon => self.time_marathon,
        }
    }
}

/// HTTP client for a wearable-account race-predictions endpoint
#[derive(Debug)]
pub struct WearablePredictionsClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl WearablePredictionsClient {
    /// Build a client from the predictions section of the server config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when no base URL is configured, or when the HTTP
    /// client cannot be constructed.
    pub fn from_config(config: &PredictionProviderConfig) -> AppResult<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| AppError::config("STRIDER_PREDICTIONS_URL is not set"))?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    async fn fetch_predictions(&self) -> AppResult<PredictionsPayload> {
        let url = format!("{}/race-predictions", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!("race-predictions request failed: {e}");
            AppError::external_service(SERVICE_NAME, format!("request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("race-predictions returned status {status}");
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("upstream returned status {status}"),
            ));
        }

        response.json::<PredictionsPayload>().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("invalid response body: {e}"))
        })
    }
}

#[async_trait::async_trait]
impl RacePredictionProvider for WearablePredictionsClient {
    async fn race_prediction(&self, distance: RaceDistance) -> AppResult<RacePrediction> {
        let payload = self.fetch_predictions().await?;
        let seconds = payload.seconds_for(distance).ok_or_else(|| {
            AppError::prediction_unavailable(format!(
                "wearable account has no {distance} prediction; re-sync the device and retry"
            ))
        })?;
        debug!("fetched {distance} prediction: {seconds}s");
        RacePrediction::new(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_field_mapping() {
        let payload: PredictionsPayload = serde_json::from_str(
            r#"{"time5K": 1320.0, "time10K": 2760.0, "timeHalfMarathon": 6300.0}"#,
        )
        .unwrap();
        assert_eq!(payload.seconds_for(RaceDistance::FiveK), Some(1320.0));
        assert_eq!(payload.seconds_for(RaceDistance::TenK), Some(2760.0));
        assert_eq!(
            payload.seconds_for(RaceDistance::HalfMarathon),
            Some(6300.0)
        );
        assert_eq!(payload.seconds_for(RaceDistance::Marathon), None);
    }

    #[test]
    fn test_missing_base_url_is_config_error() {
        let config = PredictionProviderConfig {
            base_url: None,
            api_token: None,
        };
        let err = WearablePredictionsClient::from_config(&config).unwrap_err();
        assert_eq!(err.code, strider_core::ErrorCode::ConfigError);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = PredictionProviderConfig {
            base_url: Some("https://api.example.com/".into()),
            api_token: None,
        };
        let client = WearablePredictionsClient::from_config(&config).unwrap();
        assert_eq!(client.base_url, "https://api.example.com");
    }
}
