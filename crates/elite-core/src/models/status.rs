//! Effective vehicle status
//!
//! The status shown for a vehicle against a date range. It is derived on
//! every query and never stored.

use super::vehicle::MaintenanceStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display status of a vehicle for a reference date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectiveStatus {
    /// Held by an active or confirmed reservation in the range
    Reserved,
    UnderMaintenance,
    MaintenanceRequired,
    /// Free to rent
    MaintenanceCompleted,
    OutOfService,
}

impl EffectiveStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveStatus::Reserved => "reserved",
            EffectiveStatus::UnderMaintenance => "underMaintenance",
            EffectiveStatus::MaintenanceRequired => "maintenanceRequired",
            EffectiveStatus::MaintenanceCompleted => "maintenanceCompleted",
            EffectiveStatus::OutOfService => "outOfService",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("reserved") {
            return Some(EffectiveStatus::Reserved);
        }
        MaintenanceStatus::parse(s).map(Into::into)
    }
}

impl From<MaintenanceStatus> for EffectiveStatus {
    fn from(status: MaintenanceStatus) -> Self {
        match status {
            MaintenanceStatus::UnderMaintenance => EffectiveStatus::UnderMaintenance,
            MaintenanceStatus::MaintenanceRequired => EffectiveStatus::MaintenanceRequired,
            MaintenanceStatus::MaintenanceCompleted => EffectiveStatus::MaintenanceCompleted,
            MaintenanceStatus::OutOfService => EffectiveStatus::OutOfService,
        }
    }
}

impl fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
