//! Vehicle model
//!
//! Represents a rentable vehicle in the fleet as supplied by the fleet API.
//! The availability computation only reads vehicles; creation, updates and
//! deletion happen upstream.

use super::ids::VehicleId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maintenance flag stored on the vehicle itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaintenanceStatus {
    /// Vehicle is in the workshop
    UnderMaintenance,
    /// Vehicle is due for maintenance
    MaintenanceRequired,
    /// Maintenance done, vehicle can be rented
    MaintenanceCompleted,
    /// Vehicle is retired or broken
    OutOfService,
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MaintenanceStatus {
    /// All maintenance states, in display order
    pub const ALL: [MaintenanceStatus; 4] = [
        MaintenanceStatus::UnderMaintenance,
        MaintenanceStatus::MaintenanceRequired,
        MaintenanceStatus::MaintenanceCompleted,
        MaintenanceStatus::OutOfService,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::UnderMaintenance => "underMaintenance",
            MaintenanceStatus::MaintenanceRequired => "maintenanceRequired",
            MaintenanceStatus::MaintenanceCompleted => "maintenanceCompleted",
            MaintenanceStatus::OutOfService => "outOfService",
        }
    }

    /// Parse from string (case-insensitive, accepts snake_case too)
    ///
    /// Unknown values such as `available` return `None`, meaning no
    /// maintenance flag is set.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "undermaintenance" => Some(MaintenanceStatus::UnderMaintenance),
            "maintenancerequired" => Some(MaintenanceStatus::MaintenanceRequired),
            "maintenancecompleted" => Some(MaintenanceStatus::MaintenanceCompleted),
            "outofservice" => Some(MaintenanceStatus::OutOfService),
            _ => None,
        }
    }
}

/// Vehicle entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier
    pub id: VehicleId,

    /// Display name
    pub name: String,

    pub brand: String,

    pub model: String,

    /// Number of seats
    pub capacity: u32,

    /// Vehicle category (e.g. "SUV", "Sedán")
    #[serde(rename = "type")]
    pub vehicle_type: String,

    /// Daily rental rate
    pub price_per_day: Decimal,

    /// Odometer reading
    pub kilometers: u64,

    /// Odometer reading at which maintenance is due
    #[serde(default)]
    pub km_for_maintenance: Option<u64>,

    /// Ordered list of feature labels
    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub main_image_url: Option<String>,

    #[serde(default)]
    pub image_urls: Vec<String>,

    /// Intrinsic maintenance status (None = no flag set)
    #[serde(default)]
    pub status: Option<MaintenanceStatus>,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            id: VehicleId::new(""),
            name: String::new(),
            brand: String::new(),
            model: String::new(),
            capacity: 0,
            vehicle_type: String::new(),
            price_per_day: Decimal::ZERO,
            kilometers: 0,
            km_for_maintenance: None,
            features: Vec::new(),
            main_image_url: None,
            image_urls: Vec::new(),
            status: None,
        }
    }
}

/// Data for registering a new vehicle with the fleet API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub capacity: u32,
    pub vehicle_type: String,
    pub price_per_day: Decimal,
    pub kilometers: u64,
    pub km_for_maintenance: Option<u64>,
    pub features: Vec<String>,
    pub main_image_url: Option<String>,
    pub image_urls: Vec<String>,
}

/// Fields of a vehicle the fleet API allows to change after creation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUpdate {
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_day: Decimal,
    pub kilometers: u64,
    pub features: Vec<String>,
    pub main_image_url: Option<String>,
    pub image_urls: Vec<String>,
}

/// Normalize a free-form list of labels
///
/// Trims every entry and drops the blank ones, keeping order.
pub fn clean_labels<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|l| l.as_ref().trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Split a comma-separated label string ("GPS, A/C, ") into clean labels
pub fn split_labels(raw: &str) -> Vec<String> {
    clean_labels(raw.split(','))
}
