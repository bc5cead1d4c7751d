//! Reservation model
//!
//! A reservation occupies its vehicle for every day of `[start_date, end_date]`.
//! Once created it is never edited; the only transition is cancellation.

use super::date_range::DateRange;
use super::ids::{ReservationId, VehicleId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Reservation is holding its vehicle
    #[default]
    #[serde(alias = "ACTIVE")]
    Active,
    /// Reservation was confirmed by the fleet API
    #[serde(alias = "CONFIRMED")]
    Confirmed,
    /// Reservation was cancelled by the customer or an admin
    #[serde(alias = "CANCELLED", alias = "canceled", alias = "CANCELED")]
    Cancelled,
    /// Rental window is over
    #[serde(alias = "COMPLETED")]
    Completed,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Active => write!(f, "active"),
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
            ReservationStatus::Completed => write!(f, "completed"),
        }
    }
}

impl ReservationStatus {
    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(ReservationStatus::Active),
            "confirmed" => Some(ReservationStatus::Confirmed),
            "cancelled" | "canceled" => Some(ReservationStatus::Cancelled),
            "completed" => Some(ReservationStatus::Completed),
            _ => None,
        }
    }

    /// Check if a reservation in this status keeps its vehicle off the market
    pub fn blocks_availability(&self) -> bool {
        matches!(self, ReservationStatus::Active | ReservationStatus::Confirmed)
    }
}

/// Customer-facing phase of a reservation relative to a reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReservationPhase {
    /// Starts after the reference day
    Upcoming,
    /// Reference day lies inside the rental window
    InProgress,
    /// Rental window closed before the reference day
    Completed,
    Cancelled,
}

impl fmt::Display for ReservationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationPhase::Upcoming => write!(f, "upcoming"),
            ReservationPhase::InProgress => write!(f, "in progress"),
            ReservationPhase::Completed => write!(f, "completed"),
            ReservationPhase::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Unique identifier
    pub id: ReservationId,

    /// Reserved vehicle
    pub vehicle_id: VehicleId,

    /// Customer who made the reservation
    #[serde(default)]
    pub user_id: Option<String>,

    /// First rental day (inclusive)
    pub start_date: NaiveDate,

    /// Last rental day (inclusive)
    pub end_date: NaiveDate,

    #[serde(default)]
    pub status: ReservationStatus,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// The occupied days as a range
    ///
    /// Reversed stored dates are normalized rather than rejected.
    pub fn date_range(&self) -> DateRange {
        DateRange::ordered(self.start_date, self.end_date)
    }

    /// Check if this reservation keeps its vehicle busy during `range`
    #[inline]
    pub fn occupies(&self, range: &DateRange) -> bool {
        self.status.blocks_availability() && range.overlaps(&self.date_range())
    }

    /// Derive the phase against a reference day
    pub fn phase(&self, today: NaiveDate) -> ReservationPhase {
        if self.status == ReservationStatus::Cancelled {
            ReservationPhase::Cancelled
        } else if self.status == ReservationStatus::Completed || self.end_date < today {
            ReservationPhase::Completed
        } else if self.start_date > today {
            ReservationPhase::Upcoming
        } else {
            ReservationPhase::InProgress
        }
    }

    /// A reservation can be cancelled until its window closes
    pub fn is_cancellable(&self, today: NaiveDate) -> bool {
        matches!(
            self.phase(today),
            ReservationPhase::Upcoming | ReservationPhase::InProgress
        )
    }
}

/// Create request sent to the reservation write API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub vehicle_id: VehicleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
