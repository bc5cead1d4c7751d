//! Availability service
//!
//! Builds the fleet view for a date range: which vehicles are held by a
//! reservation, what status every vehicle shows, and the per-status counts.

use crate::availability::{effective_status, find_unavailable_vehicle_ids};
use crate::fleet::{vehicle_types, FleetFilter, StatusCounts};
use elite_core::models::{DateRange, EffectiveStatus, Vehicle, VehicleId};
use elite_core::traits::{ReservationSource, VehicleSource};
use elite_core::AppResult;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// A vehicle annotated with its effective status
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAvailability {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub effective_status: EffectiveStatus,
}

/// Fleet view for one date range
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetAvailability {
    pub range: DateRange,

    /// Vehicles passing the filter, in roster order
    pub vehicles: Vec<VehicleAvailability>,

    /// Counts over the whole fleet, before filtering
    pub counts: StatusCounts,

    pub unavailable_vehicle_ids: Vec<VehicleId>,
}

/// Availability service
pub struct AvailabilityService {
    vehicles: Arc<dyn VehicleSource>,
    reservations: Arc<dyn ReservationSource>,
}

impl AvailabilityService {
    /// Create a new availability service
    pub fn new(vehicles: Arc<dyn VehicleSource>, reservations: Arc<dyn ReservationSource>) -> Self {
        Self {
            vehicles,
            reservations,
        }
    }

    /// Vehicles held by an active or confirmed reservation during `range`
    #[instrument(skip(self), fields(range = %range))]
    pub async fn unavailable_vehicle_ids(&self, range: &DateRange) -> AppResult<HashSet<VehicleId>> {
        let reservations = self.reservations.list_reservations(Some(range)).await?;
        let unavailable = find_unavailable_vehicle_ids(range, &reservations);

        debug!(
            "{} reservations scanned, {} vehicles unavailable",
            reservations.len(),
            unavailable.len()
        );

        Ok(unavailable)
    }

    /// Annotated fleet for `range`, narrowed by `filter`
    ///
    /// Vehicles and reservations are fetched concurrently. The two lists are
    /// not a consistent snapshot of each other.
    #[instrument(skip(self, filter), fields(range = %range))]
    pub async fn fleet_availability(
        &self,
        range: &DateRange,
        filter: &FleetFilter,
    ) -> AppResult<FleetAvailability> {
        let (vehicles, reservations) = tokio::try_join!(
            self.vehicles.list_vehicles(),
            self.reservations.list_reservations(Some(range))
        )?;

        let unavailable = find_unavailable_vehicle_ids(range, &reservations);

        let mut counts = StatusCounts::default();
        let mut annotated = Vec::with_capacity(vehicles.len());

        for vehicle in vehicles {
            let status = effective_status(&vehicle, &unavailable);
            counts.record(status);
            if filter.matches(&vehicle, status) {
                annotated.push(VehicleAvailability {
                    vehicle,
                    effective_status: status,
                });
            }
        }

        let mut unavailable_vehicle_ids: Vec<VehicleId> = unavailable.into_iter().collect();
        unavailable_vehicle_ids.sort();

        info!(
            "Fleet availability: {} vehicles, {} shown, {} reserved",
            counts.total,
            annotated.len(),
            counts.reserved
        );

        Ok(FleetAvailability {
            range: *range,
            vehicles: annotated,
            counts,
            unavailable_vehicle_ids,
        })
    }

    /// Distinct vehicle types of the fleet
    #[instrument(skip(self))]
    pub async fn vehicle_types(&self) -> AppResult<Vec<String>> {
        let vehicles = self.vehicles.list_vehicles().await?;
        Ok(vehicle_types(&vehicles))
    }
}
