//! Common DTOs used across the API

use chrono::NaiveDate;
use elite_core::models::DateRange;
use elite_core::AppError;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// Create a success response with data and message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// `?from=&to=` query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeParams {
    /// Resolve to a concrete range
    ///
    /// A missing `from` is the reference day; a missing `to` is `from`, so
    /// no parameters at all means "today".
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange, AppError> {
        let from = self.from.unwrap_or(today);
        let to = self.to.unwrap_or(from);
        DateRange::new(from, to)
    }
}
