//! Availability, pricing and booking services for Elite Drive
//!
//! The [`availability`] module holds the pure computation: date validation,
//! quotes, reservation conflict detection and effective vehicle status. It
//! does no I/O and reads no clock; the reference day is always a parameter.
//!
//! The services on top of it fetch vehicles and reservations through the
//! collaborator traits of `elite-core` and feed the in-memory collections to
//! the pure functions.
//!
//! # Services
//!
//! - `AvailabilityService` - Fleet availability view for a date range
//! - `BookingService` - Quotes, reservation creation and cancellation

pub mod availability;
pub mod availability_service;
pub mod booking_service;
pub mod fleet;

pub use availability_service::{AvailabilityService, FleetAvailability, VehicleAvailability};
pub use booking_service::{
    BookingConfirmation, BookingService, QuoteResult, ReservationRequest, ReservationView,
};
pub use fleet::{vehicle_types, FleetFilter, StatusCounts};

#[cfg(test)]
pub(crate) mod test_support;

/// Business logic constants
pub mod constants {
    /// Decimal places of the rental currency (cents)
    pub const CURRENCY_SCALE: u32 = 2;
}
