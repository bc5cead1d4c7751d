//! Vehicle status resolution

use elite_core::models::{EffectiveStatus, Vehicle, VehicleId};
use std::collections::HashSet;

/// Resolve the status a vehicle shows for the range `unavailable` was computed for
///
/// A vehicle held by a reservation is `Reserved` whatever its maintenance
/// flag says, `OutOfService` included. Otherwise the intrinsic flag is used,
/// and a vehicle with no flag is free to rent.
#[inline]
pub fn effective_status(vehicle: &Vehicle, unavailable: &HashSet<VehicleId>) -> EffectiveStatus {
    if unavailable.contains(&vehicle.id) {
        return EffectiveStatus::Reserved;
    }

    vehicle
        .status
        .map(EffectiveStatus::from)
        .unwrap_or(EffectiveStatus::MaintenanceCompleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elite_core::models::MaintenanceStatus;

    fn vehicle(id: &str, status: Option<MaintenanceStatus>) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id),
            name: "Corolla".to_string(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_reserved_overrides_every_flag() {
        let unavailable: HashSet<VehicleId> = [VehicleId::new("V1")].into_iter().collect();

        let mut flags: Vec<Option<MaintenanceStatus>> =
            MaintenanceStatus::ALL.iter().copied().map(Some).collect();
        flags.push(None);

        for flag in flags {
            assert_eq!(
                effective_status(&vehicle("V1", flag), &unavailable),
                EffectiveStatus::Reserved,
                "flag {:?}",
                flag
            );
        }
    }

    #[test]
    fn test_intrinsic_flag_when_free() {
        let unavailable = HashSet::new();

        assert_eq!(
            effective_status(&vehicle("V2", Some(MaintenanceStatus::OutOfService)), &unavailable),
            EffectiveStatus::OutOfService
        );
        assert_eq!(
            effective_status(
                &vehicle("V2", Some(MaintenanceStatus::UnderMaintenance)),
                &unavailable
            ),
            EffectiveStatus::UnderMaintenance
        );
    }

    #[test]
    fn test_missing_flag_means_rentable() {
        let unavailable: HashSet<VehicleId> = [VehicleId::new("V1")].into_iter().collect();
        assert_eq!(
            effective_status(&vehicle("V2", None), &unavailable),
            EffectiveStatus::MaintenanceCompleted
        );
    }
}
