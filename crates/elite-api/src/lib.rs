//! API layer for Elite Drive
//!
//! HTTP handlers for the fleet availability view, quotes, reservations and
//! the admin vehicle endpoints.

#![forbid(unsafe_code)]

pub mod dto;
pub mod handlers;
pub mod state;

pub use dto::ApiResponse;
pub use handlers::configure_api;
pub use state::AppState;
