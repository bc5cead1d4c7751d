//! REST client for the Elite Drive fleet and reservation API
//!
//! Implements the collaborator traits of `elite-core` over HTTP. Payloads are
//! normalized in [`wire`] before they reach the domain models.

pub mod client;
pub mod error;
pub mod wire;

pub use client::FleetApiClient;
pub use error::ClientError;
