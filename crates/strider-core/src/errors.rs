// ABOUTME: Unified error handling for the Strider service
// ABOUTME: Defines error codes, the AppError type, and HTTP response formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling System
//!
//! Standard error types, error codes, and HTTP response formatting shared by
//! the periodization engine and the service shell. Engine components are pure
//! functions: they return errors, they never log-and-continue, and a failed
//! call never produces a partial weekly schedule.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Request field is out of range or otherwise malformed
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Race date is not a valid ISO date
    #[serde(rename = "INVALID_DATE")]
    InvalidDate,
    /// Race prediction is absent or non-positive
    #[serde(rename = "INVALID_PREDICTION")]
    InvalidPrediction,
    /// Bad weekday name, run-day count out of range, or bad server config
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Upstream race-prediction data is missing for the requested distance
    #[serde(rename = "PREDICTION_UNAVAILABLE")]
    PredictionUnavailable,
    /// An upstream collaborator failed
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidDate | Self::InvalidPrediction | Self::ConfigError => {
                400
            }
            // Distinct from a plain 400 so the caller can prompt a device
            // re-sync instead of retrying blindly.
            Self::PredictionUnavailable => 404,
            Self::ExternalServiceError => 502,
            Self::SerializationError | Self::InternalError => 500,
        }
    }

    /// Get a human-readable description of the error category
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidDate => "The race date is not a valid ISO date",
            Self::InvalidPrediction => "The race prediction is missing or non-positive",
            Self::ConfigError => "Configuration error encountered",
            Self::PredictionUnavailable => "Race prediction data not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed race date
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDate, message)
    }

    /// Missing or non-positive race prediction value
    pub fn invalid_prediction(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPrediction, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Upstream race prediction data missing for a distance
    pub fn prediction_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PredictionUnavailable, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Structured error body returned to HTTP clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
