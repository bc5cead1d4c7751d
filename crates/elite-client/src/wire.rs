//! Wire formats of the fleet API
//!
//! The upstream payloads are looser than the domain models: the vehicle type
//! is nested (`vehicleType.type`), prices arrive as numbers or strings, list
//! fields may be comma-separated strings, and a reservation names its vehicle
//! in one of three ways. Everything is normalized here so the rest of the
//! crate only sees `elite_core` models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use elite_core::models::vehicle::{clean_labels, split_labels};
use elite_core::models::{
    MaintenanceStatus, Reservation, ReservationId, ReservationStatus,
    Vehicle, VehicleDraft, VehicleId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// A JSON number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrString {
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            NumberOrString::Number(n) => Decimal::from_str(&n.to_string())
                .or_else(|_| Decimal::from_scientific(&n.to_string()))
                .ok(),
            NumberOrString::Text(s) => Decimal::from_str(s.trim()).ok(),
        }
    }

    pub fn into_string(self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s,
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        match self {
            NumberOrString::Number(n) => n.as_u64(),
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A JSON list of strings or one comma-separated string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelList {
    List(Vec<Option<String>>),
    Joined(String),
}

impl LabelList {
    pub fn into_labels(self) -> Vec<String> {
        match self {
            LabelList::List(items) => clean_labels(items.into_iter().flatten()),
            LabelList::Joined(raw) => split_labels(&raw),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireVehicleType {
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

/// `vehicleType` as `{"type": "SUV"}` or plain `"SUV"`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VehicleTypeField {
    Nested(WireVehicleType),
    Flat(String),
}

impl VehicleTypeField {
    fn into_name(self) -> Option<String> {
        match self {
            VehicleTypeField::Nested(t) => t.type_name,
            VehicleTypeField::Flat(name) => Some(name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireRef {
    pub id: Option<VehicleId>,
}

/// Vehicle as returned by `GET /vehicles`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireVehicle {
    pub id: VehicleId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub capacity: Option<NumberOrString>,
    #[serde(default)]
    pub vehicle_type: Option<VehicleTypeField>,
    #[serde(default, rename = "type")]
    pub flat_type: Option<String>,
    #[serde(default)]
    pub price_per_day: Option<NumberOrString>,
    #[serde(default)]
    pub kilometers: Option<NumberOrString>,
    #[serde(default)]
    pub km_for_maintenance: Option<NumberOrString>,
    #[serde(default)]
    pub features: Option<LabelList>,
    #[serde(default)]
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub image_urls: Option<LabelList>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<WireVehicle> for Vehicle {
    fn from(wire: WireVehicle) -> Self {
        let vehicle_type = wire
            .vehicle_type
            .and_then(VehicleTypeField::into_name)
            .or(wire.flat_type)
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        let price_per_day = match wire.price_per_day.as_ref().map(NumberOrString::to_decimal) {
            Some(Some(price)) => {
                if price.is_sign_negative() {
                    warn!(vehicle_id = %wire.id, %price, "Vehicle has a negative daily price");
                }
                price
            }
            Some(None) => {
                warn!(vehicle_id = %wire.id, raw = ?wire.price_per_day, "Unparseable daily price, using 0");
                Decimal::ZERO
            }
            None => {
                warn!(vehicle_id = %wire.id, "Vehicle has no daily price, using 0");
                Decimal::ZERO
            }
        };

        Vehicle {
            id: wire.id,
            name: wire.name.unwrap_or_default(),
            brand: wire.brand.unwrap_or_default(),
            model: wire.model.unwrap_or_default(),
            capacity: wire
                .capacity
                .and_then(|c| c.to_u64())
                .and_then(|c| u32::try_from(c).ok())
                .unwrap_or(0),
            vehicle_type,
            price_per_day,
            kilometers: wire.kilometers.and_then(|k| k.to_u64()).unwrap_or(0),
            km_for_maintenance: wire.km_for_maintenance.and_then(|k| k.to_u64()),
            features: wire.features.map(LabelList::into_labels).unwrap_or_default(),
            main_image_url: wire.main_image_url.filter(|u| !u.trim().is_empty()),
            image_urls: wire.image_urls.map(LabelList::into_labels).unwrap_or_default(),
            status: wire.status.as_deref().and_then(MaintenanceStatus::parse),
        }
    }
}

/// Body of `POST /vehicles`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireVehicleDraft<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub model: &'a str,
    pub capacity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_day: Decimal,
    pub kilometers: u64,
    pub km_for_maintenance: Option<u64>,
    pub features: &'a [String],
    pub vehicle_type: WireVehicleType,
    pub main_image_url: Option<&'a str>,
    pub image_urls: &'a [String],
}

impl<'a> From<&'a VehicleDraft> for WireVehicleDraft<'a> {
    fn from(draft: &'a VehicleDraft) -> Self {
        Self {
            name: &draft.name,
            brand: &draft.brand,
            model: &draft.model,
            capacity: draft.capacity,
            price_per_day: draft.price_per_day,
            kilometers: draft.kilometers,
            km_for_maintenance: draft.km_for_maintenance,
            features: &draft.features,
            vehicle_type: WireVehicleType {
                type_name: Some(draft.vehicle_type.clone()),
            },
            main_image_url: draft.main_image_url.as_deref(),
            image_urls: &draft.image_urls,
        }
    }
}

/// Reservation as returned by the reservation endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReservation {
    pub id: ReservationId,
    #[serde(default)]
    pub vehicle: Option<WireRef>,
    #[serde(default, alias = "vehicle_id")]
    pub vehicle_id: Option<VehicleId>,
    #[serde(default, alias = "user_id")]
    pub user_id: Option<NumberOrString>,
    #[serde(alias = "start_date")]
    pub start_date: String,
    #[serde(alias = "end_date")]
    pub end_date: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

impl TryFrom<WireReservation> for Reservation {
    type Error = String;

    fn try_from(wire: WireReservation) -> Result<Self, Self::Error> {
        let vehicle_id = wire
            .vehicle
            .and_then(|v| v.id)
            .or(wire.vehicle_id)
            .ok_or_else(|| format!("reservation {} has no vehicle id", wire.id))?;

        Ok(Reservation {
            start_date: parse_day(&wire.start_date)
                .ok_or_else(|| format!("reservation {}: bad start date {:?}", wire.id, wire.start_date))?,
            end_date: parse_day(&wire.end_date)
                .ok_or_else(|| format!("reservation {}: bad end date {:?}", wire.id, wire.end_date))?,
            id: wire.id,
            vehicle_id,
            user_id: wire.user_id.map(NumberOrString::into_string),
            status: wire
                .status
                .as_deref()
                .and_then(ReservationStatus::parse)
                .unwrap_or_default(),
            created_at: wire.created_at.as_deref().and_then(parse_timestamp),
        })
    }
}

/// Decode one list entry, whatever JSON shape it has
pub fn reservation_from_value(value: serde_json::Value) -> Result<Reservation, String> {
    let wire: WireReservation = serde_json::from_value(value).map_err(|e| e.to_string())?;
    Reservation::try_from(wire)
}

/// Parse a calendar day, ignoring any time-of-day suffix
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Parse an RFC 3339 timestamp, or a zone-less one taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
