//! Date validation findings
//!
//! Findings are plain values returned to the caller, which decides whether
//! to block a submission or merely show inline warnings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// No start date given
    StartRequired,
    /// No end date given
    EndRequired,
    /// Start date lies before the reference day
    StartInPast,
    /// End date is the same as or before the start date
    EndNotAfterStart,
    /// No vehicle selected for the reservation
    VehicleRequired,
}

impl ValidationErrorKind {
    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::StartRequired => "start_required",
            ValidationErrorKind::EndRequired => "end_required",
            ValidationErrorKind::StartInPast => "start_in_past",
            ValidationErrorKind::EndNotAfterStart => "end_not_after_start",
            ValidationErrorKind::VehicleRequired => "vehicle_required",
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            ValidationErrorKind::StartRequired => "start date is required",
            ValidationErrorKind::EndRequired => "end date is required",
            ValidationErrorKind::StartInPast => "start date cannot be before today",
            ValidationErrorKind::EndNotAfterStart => "end date must be after the start date",
            ValidationErrorKind::VehicleRequired => "vehicle id is required",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating a date pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValidation {
    /// Every rule that failed, in rule order
    pub errors: Vec<ValidationErrorKind>,
}

impl DateValidation {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check whether a specific rule failed
    pub fn has(&self, kind: ValidationErrorKind) -> bool {
        self.errors.contains(&kind)
    }

    /// Record a finding once
    pub fn push(&mut self, kind: ValidationErrorKind) {
        if !self.has(kind) {
            self.errors.push(kind);
        }
    }
}
