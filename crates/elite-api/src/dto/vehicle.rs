//! Vehicle DTOs
//!
//! Request and response types for the fleet view and the admin vehicle
//! endpoints.

use super::common::DateRangeParams;
use chrono::NaiveDate;
use elite_core::models::vehicle::{clean_labels, split_labels};
use elite_core::models::{EffectiveStatus, VehicleDraft, VehicleUpdate};
use elite_core::AppError;
use elite_services::FleetFilter;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Query parameters of `GET /vehicles`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetQueryParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    /// Effective status name, or `all`
    pub status: Option<String>,
}

impl FleetQueryParams {
    pub fn range_params(&self) -> DateRangeParams {
        DateRangeParams {
            from: self.from,
            to: self.to,
        }
    }

    /// Build the fleet filter, rejecting unknown status names
    pub fn to_filter(&self) -> Result<FleetFilter, AppError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) if s.eq_ignore_ascii_case("all") => None,
            Some(s) => Some(
                EffectiveStatus::parse(s)
                    .ok_or_else(|| AppError::InvalidInput(format!("unknown status: {}", s)))?,
            ),
        };

        let vehicle_type = self
            .vehicle_type
            .clone()
            .filter(|t| !t.trim().is_empty() && !t.trim().eq_ignore_ascii_case("all"));

        Ok(FleetFilter {
            search: self.search.clone(),
            vehicle_type,
            status,
        })
    }
}

/// A list of labels sent as a JSON array or as one comma-separated string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelsInput {
    List(Vec<String>),
    Joined(String),
}

impl Default for LabelsInput {
    fn default() -> Self {
        LabelsInput::List(Vec::new())
    }
}

impl LabelsInput {
    pub fn to_labels(&self) -> Vec<String> {
        match self {
            LabelsInput::List(items) => clean_labels(items),
            LabelsInput::Joined(raw) => split_labels(raw),
        }
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price_per_day_negative"));
    }
    Ok(())
}

fn blank_to_none(url: &Option<String>) -> Option<String> {
    url.as_ref()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
}

/// Vehicle creation request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCreateRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Brand is required"))]
    pub brand: String,

    #[validate(length(min = 1, max = 50, message = "Model is required"))]
    pub model: String,

    /// Number of seats
    #[validate(range(min = 1, max = 60))]
    pub capacity: u32,

    #[serde(alias = "type")]
    #[validate(length(min = 1, max = 50, message = "Vehicle type is required"))]
    pub vehicle_type: String,

    #[validate(custom(function = "validate_price"))]
    pub price_per_day: Decimal,

    pub kilometers: u64,

    #[serde(default)]
    pub km_for_maintenance: Option<u64>,

    #[serde(default)]
    pub features: LabelsInput,

    #[serde(default)]
    pub main_image_url: Option<String>,

    #[serde(default)]
    pub image_urls: LabelsInput,
}

impl VehicleCreateRequest {
    /// Convert to the draft sent to the fleet API
    pub fn to_draft(&self) -> VehicleDraft {
        VehicleDraft {
            name: self.name.trim().to_string(),
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            capacity: self.capacity,
            vehicle_type: self.vehicle_type.trim().to_string(),
            price_per_day: self.price_per_day,
            kilometers: self.kilometers,
            km_for_maintenance: self.km_for_maintenance,
            features: self.features.to_labels(),
            main_image_url: blank_to_none(&self.main_image_url),
            image_urls: self.image_urls.to_labels(),
        }
    }
}

/// Vehicle update request
///
/// Only price, odometer, features and images can change after creation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUpdateRequest {
    #[validate(custom(function = "validate_price"))]
    pub price_per_day: Decimal,

    pub kilometers: u64,

    #[serde(default)]
    pub features: LabelsInput,

    #[serde(default)]
    pub main_image_url: Option<String>,

    #[serde(default)]
    pub image_urls: LabelsInput,
}

impl VehicleUpdateRequest {
    pub fn to_update(&self) -> VehicleUpdate {
        VehicleUpdate {
            price_per_day: self.price_per_day,
            kilometers: self.kilometers,
            features: self.features.to_labels(),
            main_image_url: blank_to_none(&self.main_image_url),
            image_urls: self.image_urls.to_labels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_request(price: Decimal) -> VehicleCreateRequest {
        serde_json::from_value(serde_json::json!({
            "name": " Explorer ",
            "brand": "Ford",
            "model": "XLT",
            "capacity": 7,
            "type": "SUV",
            "pricePerDay": price,
            "kilometers": 1200,
            "features": "GPS, A/C, ",
            "mainImageUrl": "  ",
            "imageUrls": ["a.jpg", " "]
        }))
        .unwrap()
    }

    #[test]
    fn test_create_request_to_draft() {
        let request = create_request(dec!(45.00));
        assert!(request.validate().is_ok());

        let draft = request.to_draft();
        assert_eq!(draft.name, "Explorer");
        assert_eq!(draft.vehicle_type, "SUV");
        assert_eq!(draft.features, vec!["GPS", "A/C"]);
        assert_eq!(draft.image_urls, vec!["a.jpg"]);
        assert_eq!(draft.main_image_url, None);
    }

    #[test]
    fn test_create_request_rejects_negative_price() {
        assert!(create_request(dec!(-1)).validate().is_err());
    }

    #[test]
    fn test_update_request_defaults() {
        let request: VehicleUpdateRequest =
            serde_json::from_str(r#"{"pricePerDay": 50, "kilometers": 10}"#).unwrap();
        let update = request.to_update();
        assert!(update.features.is_empty());
        assert_eq!(update.price_per_day, dec!(50));
    }

    #[test]
    fn test_fleet_query_filter() {
        let params = FleetQueryParams {
            vehicle_type: Some("all".to_string()),
            status: Some("reserved".to_string()),
            ..Default::default()
        };
        let filter = params.to_filter().unwrap();
        assert_eq!(filter.vehicle_type, None);
        assert_eq!(filter.status, Some(EffectiveStatus::Reserved));

        let bad = FleetQueryParams {
            status: Some("parked".to_string()),
            ..Default::default()
        };
        assert!(bad.to_filter().is_err());
    }
}
