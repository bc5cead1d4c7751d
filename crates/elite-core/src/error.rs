//! Unified error handling for Elite Drive
//!
//! This module provides the error type shared by the services, the fleet API
//! client and the HTTP layer, with automatic HTTP response mapping.
//!
//! Validation findings for a date range are *not* errors: they are returned
//! as values (see [`crate::models::ValidationErrorKind`]). They only become an
//! [`AppError`] when a caller decides to block a write because of them.

use crate::models::ValidationErrorKind;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Main application error type
///
/// It implements `ResponseError` for automatic HTTP response generation.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Booking Errors ====================
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Vehicle {0} is not available for the requested dates")]
    VehicleUnavailable(String),

    #[error("Reservation {id} cannot be cancelled: it is {phase}")]
    ReservationNotCancellable { id: String, phase: String },

    #[error("Reservation rejected: {}", join_issues(.0))]
    ReservationRejected(Vec<ValidationErrorKind>),

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ==================== Resource Errors ====================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // ==================== Upstream API Errors ====================
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Fleet API error: {0}")]
    Upstream(String),

    #[error("Fleet API timed out after {0}s")]
    UpstreamTimeout(u64),

    // ==================== Internal Errors ====================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn join_issues(issues: &[ValidationErrorKind]) -> String {
    issues
        .iter()
        .map(ValidationErrorKind::message)
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Validation(_)
            | AppError::InvalidInput(_)
            | AppError::ReservationRejected(_) => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,

            // 404 Not Found
            AppError::VehicleNotFound(_)
            | AppError::ReservationNotFound(_)
            | AppError::NotFound(_) => StatusCode::NOT_FOUND,

            // 409 Conflict
            AppError::VehicleUnavailable(_)
            | AppError::ReservationNotCancellable { .. }
            | AppError::Conflict(_) => StatusCode::CONFLICT,

            // 502 / 504 from the fleet API
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,

            // 500 Internal Server Error
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::VehicleNotFound(_) => "vehicle_not_found",
            AppError::ReservationNotFound(_) => "reservation_not_found",
            AppError::VehicleUnavailable(_) => "vehicle_unavailable",
            AppError::ReservationNotCancellable { .. } => "reservation_not_cancellable",
            AppError::ReservationRejected(_) => "reservation_rejected",
            AppError::Validation(_) => "validation_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Forbidden(_) => "forbidden",
            AppError::Upstream(_) => "upstream_error",
            AppError::UpstreamTimeout(_) => "upstream_timeout",
            AppError::Internal(_) => "internal_error",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut body = json!({
            "error": self.error_code(),
            "message": self.to_string(),
            "status": status.as_u16(),
        });

        if let AppError::ReservationRejected(issues) = self {
            body["issues"] = json!(issues);
        }

        HttpResponse::build(status).json(body)
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
