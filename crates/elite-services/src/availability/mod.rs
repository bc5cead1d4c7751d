//! Reservation availability and pricing
//!
//! Pure, synchronous functions. Safe to call from any thread, any number of
//! times, with no coordination.

pub mod conflict;
pub mod index;
pub mod pricing;
pub mod status;
pub mod validator;

pub use conflict::find_unavailable_vehicle_ids;
pub use index::ReservationIndex;
pub use pricing::{compute_quote, quote};
pub use status::effective_status;
pub use validator::{validate_dates, validate_request};
