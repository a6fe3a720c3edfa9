//! Unified error types for the bike & tour API
//!
//! This module defines error types for each layer:
//! - `ValidationError`: A record failed one of its field or cross-field rules
//! - `DomainError`: Core errors returned by services and repositories
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// A broken entity invariant, reported before the store is touched.
///
/// Validators check their rules in a fixed order and report the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("bike type must not be empty")]
    EmptyType,

    #[error("frame number must not be empty")]
    EmptyFrameNumber,

    #[error("wheel size must be greater than 0")]
    InvalidWheelSize,

    #[error("start location must not be empty")]
    EmptyStartLocation,

    #[error("end location must not be empty")]
    EmptyEndLocation,

    #[error("start and end location must not be identical")]
    IdenticalLocations,

    #[error("end time must be after start time")]
    EndBeforeStart,

    #[error("companion must not be empty")]
    EmptyCompanion,

    #[error("bike must not be empty")]
    EmptyBike,
}

impl ValidationError {
    /// Name of the offending field, as it appears in JSON payloads
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyType => "type",
            ValidationError::EmptyFrameNumber => "frame_number",
            ValidationError::InvalidWheelSize => "wheel_size",
            ValidationError::EmptyStartLocation => "start_location",
            ValidationError::EmptyEndLocation | ValidationError::IdenticalLocations => {
                "end_location"
            }
            ValidationError::EndBeforeStart => "end_time",
            ValidationError::EmptyCompanion => "companion",
            ValidationError::EmptyBike => "bike",
        }
    }

    /// Machine-readable rule identifier
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::EmptyType => "empty_type",
            ValidationError::EmptyFrameNumber => "empty_frame_number",
            ValidationError::InvalidWheelSize => "invalid_wheel_size",
            ValidationError::EmptyStartLocation => "empty_start_location",
            ValidationError::EmptyEndLocation => "empty_end_location",
            ValidationError::IdenticalLocations => "identical_locations",
            ValidationError::EndBeforeStart => "end_before_start",
            ValidationError::EmptyCompanion => "empty_companion",
            ValidationError::EmptyBike => "empty_bike",
        }
    }
}

/// Domain layer errors - returned unchanged by services and repositories
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Frame number already registered: {0}")]
    DuplicateFrameNumber(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, violation) = match &self {
            AppError::Domain(DomainError::Validation(err)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(err.to_string()),
                Some(*err),
            ),
            AppError::Domain(DomainError::DuplicateFrameNumber(frame_number)) => (
                StatusCode::CONFLICT,
                "Already exists",
                Some(format!("frame number {} is already registered", frame_number)),
                None,
            ),
            AppError::Domain(DomainError::Storage(msg)) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request",
                Some(msg.clone()),
                None,
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            field: violation.map(|v| v.field()),
            rule: violation.map(|v| v.rule()),
        });

        (status, body).into_response()
    }
}
