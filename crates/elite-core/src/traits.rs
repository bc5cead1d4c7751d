//! Collaborator traits
//!
//! Abstractions over the remote fleet and reservation APIs. The availability
//! computation never calls these; the services fetch through them and hand
//! in-memory collections to the pure functions.

use crate::error::AppError;
use crate::models::{
    DateRange, NewReservation, Reservation, ReservationId, Vehicle, VehicleDraft, VehicleId,
    VehicleUpdate,
};
use async_trait::async_trait;

/// Read access to the vehicle roster
#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// List every vehicle in the fleet
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError>;

    /// Find a vehicle by ID
    async fn find_vehicle(&self, id: &VehicleId) -> Result<Option<Vehicle>, AppError>;
}

/// Read access to reservations
#[async_trait]
pub trait ReservationSource: Send + Sync {
    /// List reservations, optionally narrowed to a date range
    ///
    /// Implementations may return more than the range asks for; callers
    /// filter again.
    async fn list_reservations(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<Reservation>, AppError>;

    /// Find a reservation by ID
    async fn find_reservation(&self, id: &ReservationId)
        -> Result<Option<Reservation>, AppError>;

    /// List reservations made by one customer
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Reservation>, AppError>;
}

/// Write access to reservations
#[async_trait]
pub trait ReservationWriter: Send + Sync {
    /// Create a reservation
    async fn create_reservation(&self, request: &NewReservation) -> Result<Reservation, AppError>;

    /// Cancel a reservation
    async fn cancel_reservation(&self, id: &ReservationId) -> Result<Reservation, AppError>;
}

/// Write access to the vehicle roster (admin console)
#[async_trait]
pub trait FleetWriter: Send + Sync {
    /// Register a new vehicle
    async fn create_vehicle(&self, draft: &VehicleDraft) -> Result<Vehicle, AppError>;

    /// Update the mutable fields of a vehicle
    async fn update_vehicle(
        &self,
        id: &VehicleId,
        update: &VehicleUpdate,
    ) -> Result<Vehicle, AppError>;

    /// Remove a vehicle
    async fn delete_vehicle(&self, id: &VehicleId) -> Result<(), AppError>;
}
