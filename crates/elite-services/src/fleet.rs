//! Fleet view helpers
//!
//! Filtering and aggregation used by the admin console's vehicle table.
//! Everything here works on the *effective* status, so a reserved vehicle is
//! counted and filtered as reserved even if it also carries a maintenance flag.

use elite_core::models::{EffectiveStatus, Vehicle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Admin vehicle table filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetFilter {
    /// Case-insensitive substring of name, brand or model
    #[serde(default)]
    pub search: Option<String>,

    /// Case-insensitive vehicle type
    #[serde(default)]
    pub vehicle_type: Option<String>,

    #[serde(default)]
    pub status: Option<EffectiveStatus>,
}

impl FleetFilter {
    /// Filter matching every vehicle
    pub fn all() -> Self {
        Self::default()
    }

    /// Check a vehicle and its resolved status against the filter
    pub fn matches(&self, vehicle: &Vehicle, status: EffectiveStatus) -> bool {
        self.matches_search(vehicle) && self.matches_type(vehicle) && self.matches_status(status)
    }

    fn matches_search(&self, vehicle: &Vehicle) -> bool {
        let needle = match self.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return true,
        };

        [&vehicle.name, &vehicle.brand, &vehicle.model]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_type(&self, vehicle: &Vehicle) -> bool {
        match self.vehicle_type.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => {
                vehicle.vehicle_type.trim().to_lowercase() == t.to_lowercase()
            }
            _ => true,
        }
    }

    fn matches_status(&self, status: EffectiveStatus) -> bool {
        self.status.map_or(true, |wanted| wanted == status)
    }
}

/// Number of vehicles per effective status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub reserved: usize,
    pub under_maintenance: usize,
    pub maintenance_required: usize,
    pub maintenance_completed: usize,
    pub out_of_service: usize,
}

impl StatusCounts {
    /// Count one vehicle
    pub fn record(&mut self, status: EffectiveStatus) {
        self.total += 1;
        match status {
            EffectiveStatus::Reserved => self.reserved += 1,
            EffectiveStatus::UnderMaintenance => self.under_maintenance += 1,
            EffectiveStatus::MaintenanceRequired => self.maintenance_required += 1,
            EffectiveStatus::MaintenanceCompleted => self.maintenance_completed += 1,
            EffectiveStatus::OutOfService => self.out_of_service += 1,
        }
    }

    /// Vehicles that can be rented right now
    pub fn bookable(&self) -> usize {
        self.maintenance_completed
    }
}

impl FromIterator<EffectiveStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = EffectiveStatus>>(iter: I) -> Self {
        let mut counts = StatusCounts::default();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}

/// Distinct vehicle types in first-seen order, blanks skipped
pub fn vehicle_types<'a, I>(vehicles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    let mut seen = HashSet::new();
    vehicles
        .into_iter()
        .map(|v| v.vehicle_type.trim())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}
