//! Reservation DTOs

use chrono::NaiveDate;
use elite_core::models::{DateRange, DateValidation, ValidationErrorKind, VehicleId};
use elite_services::ReservationRequest;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A validation finding as sent to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl From<ValidationErrorKind> for IssueResponse {
    fn from(kind: ValidationErrorKind) -> Self {
        Self {
            code: kind.code(),
            message: kind.message(),
        }
    }
}

/// Body of `POST /reservations/validate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDatesRequest {
    #[serde(default)]
    pub vehicle_id: Option<VehicleId>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Result of validating a date pair
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: Vec<IssueResponse>,
}

impl From<DateValidation> for ValidationResponse {
    fn from(validation: DateValidation) -> Self {
        Self {
            valid: validation.is_valid(),
            errors: validation.errors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of `POST /quotes`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub vehicle_id: VehicleId,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Body of `POST /reservations`
///
/// Missing dates or vehicle are reported by the booking rules with the full
/// list of findings, so they are optional here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[serde(default)]
    pub vehicle_id: Option<VehicleId>,

    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "User id must be 1-64 characters"))]
    pub user_id: Option<String>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl From<CreateReservationRequest> for ReservationRequest {
    fn from(request: CreateReservationRequest) -> Self {
        ReservationRequest {
            vehicle_id: request.vehicle_id,
            user_id: request.user_id,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

/// Response of `GET /availability`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub range: DateRange,
    pub unavailable_vehicle_ids: Vec<VehicleId>,
}
