//! Booking service
//!
//! Quotes, reservation creation and cancellation. The reference day is passed
//! in by the caller so every rule can be tested against a fixed date.

use crate::availability::{compute_quote, quote, validate_request, ReservationIndex};
use chrono::NaiveDate;
use elite_core::models::{
    DateRange, DateValidation, MaintenanceStatus, NewReservation, Quote, Reservation,
    ReservationId, ReservationPhase, ValidationErrorKind, VehicleId,
};
use elite_core::traits::{ReservationSource, ReservationWriter, VehicleSource};
use elite_core::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Reservation request as submitted by a customer
///
/// Every field is optional so that missing values surface as validation
/// findings instead of deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    #[serde(default)]
    pub vehicle_id: Option<VehicleId>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Validation findings and price for a prospective rental
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub vehicle_id: VehicleId,
    pub price_per_day: Decimal,
    pub valid: bool,
    pub errors: Vec<ValidationErrorKind>,
    pub quote: Quote,
}

/// A created reservation with its price
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub reservation: Reservation,
    pub quote: Quote,
}

/// A reservation as shown in "my reservations"
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationView {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub phase: ReservationPhase,
    pub cancellable: bool,
}

/// Booking service
pub struct BookingService {
    vehicles: Arc<dyn VehicleSource>,
    reservations: Arc<dyn ReservationSource>,
    writer: Arc<dyn ReservationWriter>,
}

impl BookingService {
    /// Create a new booking service
    pub fn new(
        vehicles: Arc<dyn VehicleSource>,
        reservations: Arc<dyn ReservationSource>,
        writer: Arc<dyn ReservationWriter>,
    ) -> Self {
        Self {
            vehicles,
            reservations,
            writer,
        }
    }

    /// Validate a date pair and price it at the vehicle's daily rate
    ///
    /// An invalid pair still gets a quote (possibly zero) so a form can show
    /// both at once.
    ///
    /// # Errors
    ///
    /// Returns `AppError::VehicleNotFound` if the vehicle does not exist
    #[instrument(skip(self), fields(vehicle_id = %vehicle_id))]
    pub async fn quote(
        &self,
        vehicle_id: &VehicleId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> AppResult<QuoteResult> {
        let vehicle = self
            .vehicles
            .find_vehicle(vehicle_id)
            .await?
            .ok_or_else(|| AppError::VehicleNotFound(vehicle_id.to_string()))?;

        let DateValidation { errors } = validate_request(Some(vehicle_id), start, end, today);
        let quote = quote(start, end, vehicle.price_per_day);

        debug!("Quoted {} days at {} for vehicle {}", quote.days, vehicle.price_per_day, vehicle_id);

        Ok(QuoteResult {
            vehicle_id: vehicle.id,
            price_per_day: vehicle.price_per_day,
            valid: errors.is_empty(),
            errors,
            quote,
        })
    }

    /// Create a reservation
    ///
    /// Checks, in order: request validation, vehicle existence, vehicle
    /// out of service, overlap with an active or confirmed reservation.
    ///
    /// # Errors
    ///
    /// - `AppError::ReservationRejected` with every validation finding
    /// - `AppError::VehicleNotFound`
    /// - `AppError::VehicleUnavailable` if the vehicle is out of service or booked
    #[instrument(skip(self, request), fields(vehicle_id = ?request.vehicle_id))]
    pub async fn create(
        &self,
        request: &ReservationRequest,
        today: NaiveDate,
    ) -> AppResult<BookingConfirmation> {
        let validation = validate_request(
            request.vehicle_id.as_ref(),
            request.start_date,
            request.end_date,
            today,
        );
        if !validation.is_valid() {
            warn!("Reservation request rejected: {:?}", validation.errors);
            return Err(AppError::ReservationRejected(validation.errors));
        }

        let (Some(vehicle_id), Some(start), Some(end)) =
            (&request.vehicle_id, request.start_date, request.end_date)
        else {
            return Err(AppError::Internal(
                "validated request is missing a field".to_string(),
            ));
        };

        let vehicle = self
            .vehicles
            .find_vehicle(vehicle_id)
            .await?
            .ok_or_else(|| AppError::VehicleNotFound(vehicle_id.to_string()))?;

        if vehicle.status == Some(MaintenanceStatus::OutOfService) {
            warn!("Vehicle {} is out of service", vehicle_id);
            return Err(AppError::VehicleUnavailable(vehicle_id.to_string()));
        }

        let range = DateRange::new(start, end)?;
        let existing = self.reservations.list_reservations(Some(&range)).await?;
        let index = ReservationIndex::build(&existing);

        if !index.is_vehicle_available(vehicle_id, &range) {
            warn!("Vehicle {} already booked during {}", vehicle_id, range);
            return Err(AppError::VehicleUnavailable(vehicle_id.to_string()));
        }

        let reservation = self
            .writer
            .create_reservation(&NewReservation {
                vehicle_id: vehicle_id.clone(),
                user_id: request.user_id.clone(),
                start_date: start,
                end_date: end,
            })
            .await?;

        let quote = compute_quote(start, end, vehicle.price_per_day);

        info!(
            "Reservation {} created for vehicle {} ({}, {} days, total {})",
            reservation.id, vehicle_id, range, quote.days, quote.total_price
        );

        Ok(BookingConfirmation { reservation, quote })
    }

    /// Cancel a reservation that is upcoming or in progress
    ///
    /// # Errors
    ///
    /// - `AppError::ReservationNotFound`
    /// - `AppError::ReservationNotCancellable` if it is already cancelled or completed
    #[instrument(skip(self), fields(reservation_id = %id))]
    pub async fn cancel(&self, id: &ReservationId, today: NaiveDate) -> AppResult<Reservation> {
        let reservation = self
            .reservations
            .find_reservation(id)
            .await?
            .ok_or_else(|| AppError::ReservationNotFound(id.to_string()))?;

        if !reservation.is_cancellable(today) {
            let phase = reservation.phase(today);
            warn!("Reservation {} is {}, not cancelling", id, phase);
            return Err(AppError::ReservationNotCancellable {
                id: id.to_string(),
                phase: phase.to_string(),
            });
        }

        let cancelled = self.writer.cancel_reservation(id).await?;
        info!("Reservation {} cancelled", id);

        Ok(cancelled)
    }

    /// Reservations of one customer with their phase, ordered by start date
    #[instrument(skip(self))]
    pub async fn reservations_for_user(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<Vec<ReservationView>> {
        let mut reservations = self.reservations.list_by_user(user_id).await?;
        reservations.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(reservations
            .into_iter()
            .map(|reservation| ReservationView {
                phase: reservation.phase(today),
                cancellable: reservation.is_cancellable(today),
                reservation,
            })
            .collect())
    }
}
