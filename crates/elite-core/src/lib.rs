//! Elite Drive Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the Elite Drive booking backend. It includes:
//!
//! - Domain models (Vehicle, Reservation, DateRange, Quote, etc.)
//! - Collaborator traits for the fleet and reservation APIs
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
