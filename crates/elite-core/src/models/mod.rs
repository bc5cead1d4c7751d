//! Domain models for Elite Drive
//!
//! This module contains the core domain models shared by the availability
//! computation, the fleet API client and the HTTP layer.

pub mod date_range;
pub mod ids;
pub mod quote;
pub mod reservation;
pub mod status;
pub mod validation;
pub mod vehicle;

pub use date_range::DateRange;
pub use ids::{ReservationId, VehicleId};
pub use quote::Quote;
pub use reservation::{NewReservation, Reservation, ReservationPhase, ReservationStatus};
pub use status::EffectiveStatus;
pub use validation::{DateValidation, ValidationErrorKind};
pub use vehicle::{MaintenanceStatus, Vehicle, VehicleDraft, VehicleUpdate};
