//! Data Transfer Objects (DTOs) for API requests and responses

pub mod common;
pub mod reservation;
pub mod vehicle;

pub use common::*;
pub use reservation::*;
pub use vehicle::*;
