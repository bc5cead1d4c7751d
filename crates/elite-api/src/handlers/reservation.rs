//! Reservation handlers
//!
//! HTTP handlers for date validation, quotes and the reservation lifecycle.

use crate::dto::{
    ApiResponse, CreateReservationRequest, QuoteRequest, ValidateDatesRequest,
    ValidationResponse,
};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use elite_core::models::ReservationId;
use elite_core::AppError;
use elite_services::availability::{validate_dates, validate_request};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Check a date pair (and optionally a vehicle) without booking anything
///
/// POST /api/v1/reservations/validate
#[instrument(skip(state))]
pub async fn validate_reservation(
    state: web::Data<AppState>,
    req: web::Json<ValidateDatesRequest>,
) -> Result<HttpResponse, AppError> {
    let today = state.today();
    let validation = match &req.vehicle_id {
        Some(vehicle_id) => validate_request(Some(vehicle_id), req.start_date, req.end_date, today),
        None => validate_dates(req.start_date, req.end_date, today),
    };

    debug!(valid = validation.is_valid(), "Validated reservation dates");
    Ok(HttpResponse::Ok().json(ApiResponse::success(ValidationResponse::from(validation))))
}

/// Price a rental
///
/// POST /api/v1/quotes
#[instrument(skip(state))]
pub async fn create_quote(
    state: web::Data<AppState>,
    req: web::Json<QuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .booking
        .quote(&req.vehicle_id, req.start_date, req.end_date, state.today())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
}

/// Book a vehicle
///
/// POST /api/v1/reservations
#[instrument(skip(state, req))]
pub async fn create_reservation(
    state: web::Data<AppState>,
    req: web::Json<CreateReservationRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Reservation request validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let confirmation = state
        .booking
        .create(&req.into_inner().into(), state.today())
        .await?;

    info!(
        id = %confirmation.reservation.id,
        vehicle_id = %confirmation.reservation.vehicle_id,
        total = %confirmation.quote.total_price,
        "Reservation created"
    );

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        confirmation,
        "Reservation created successfully",
    )))
}

/// Cancel a reservation
///
/// POST /api/v1/reservations/{id}/cancel
#[instrument(skip(state))]
pub async fn cancel_reservation(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = ReservationId::new(path.into_inner());
    let cancelled = state.booking.cancel(&id, state.today()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        cancelled,
        "Reservation cancelled",
    )))
}

/// Reservations of one customer with their phase
///
/// GET /api/v1/reservations/user/{user_id}
#[instrument(skip(state))]
pub async fn list_user_reservations(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let views = state
        .booking
        .reservations_for_user(&user_id, state.today())
        .await?;

    debug!(user_id = %user_id, count = views.len(), "Listed user reservations");
    Ok(HttpResponse::Ok().json(ApiResponse::success(views)))
}

/// Configure reservation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/quotes", web::post().to(create_quote)).service(
        web::scope("/reservations")
            .route("", web::post().to(create_reservation))
            .route("/validate", web::post().to(validate_reservation))
            .route("/user/{user_id}", web::get().to(list_user_reservations))
            .route("/{id}/cancel", web::post().to(cancel_reservation)),
    );
}
