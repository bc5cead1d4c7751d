//! Reservation conflict detection
//!
//! Linear scan over the reservation set. Good enough for the volumes the
//! fleet API returns per query; see [`super::ReservationIndex`] when the same
//! reservation set is queried many times.

use elite_core::models::{DateRange, Reservation, VehicleId};
use std::collections::HashSet;

/// Collect the ids of vehicles held by a reservation overlapping `range`
///
/// Only `active` and `confirmed` reservations count. Overlap is closed on
/// both ends: a reservation ending on the first day of `range` conflicts.
pub fn find_unavailable_vehicle_ids<'a, I>(range: &DateRange, reservations: I) -> HashSet<VehicleId>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    reservations
        .into_iter()
        .filter(|r| r.occupies(range))
        .map(|r| r.vehicle_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use elite_core::models::{ReservationId, ReservationStatus};
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).unwrap()
    }

    fn booking(vehicle: &str, start: NaiveDate, end: NaiveDate, status: ReservationStatus) -> Reservation {
        Reservation {
            id: ReservationId::new(format!("{}-{}", vehicle, start)),
            vehicle_id: VehicleId::new(vehicle),
            user_id: None,
            start_date: start,
            end_date: end,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_boundary_day_counts() {
        let reservations = vec![booking("V1", day(2024, 6, 10), day(2024, 6, 15), ReservationStatus::Active)];

        let hit = find_unavailable_vehicle_ids(&range(day(2024, 6, 15), day(2024, 6, 20)), &reservations);
        assert_eq!(hit, HashSet::from([VehicleId::new("V1")]));

        let miss = find_unavailable_vehicle_ids(&range(day(2024, 6, 16), day(2024, 6, 20)), &reservations);
        assert!(miss.is_empty());
    }

    #[test]
    fn test_containment() {
        let reservations = vec![booking("V1", day(2024, 6, 10), day(2024, 6, 15), ReservationStatus::Confirmed)];

        let inside = find_unavailable_vehicle_ids(&range(day(2024, 6, 11), day(2024, 6, 12)), &reservations);
        assert_eq!(inside.len(), 1);

        let around = find_unavailable_vehicle_ids(&range(day(2024, 6, 1), day(2024, 6, 30)), &reservations);
        assert_eq!(around.len(), 1);
    }

    #[test]
    fn test_non_blocking_statuses_ignored() {
        let reservations = vec![
            booking("V1", day(2024, 6, 10), day(2024, 6, 15), ReservationStatus::Cancelled),
            booking("V2", day(2024, 6, 10), day(2024, 6, 15), ReservationStatus::Completed),
        ];

        let result = find_unavailable_vehicle_ids(&range(day(2024, 6, 12), day(2024, 6, 13)), &reservations);
        assert!(result.is_empty());
    }

    #[test]
    fn test_deduplicates_vehicles() {
        let reservations = vec![
            booking("V1", day(2024, 6, 1), day(2024, 6, 5), ReservationStatus::Active),
            booking("V1", day(2024, 6, 6), day(2024, 6, 9), ReservationStatus::Confirmed),
            booking("V2", day(2024, 6, 3), day(2024, 6, 4), ReservationStatus::Active),
        ];

        let result = find_unavailable_vehicle_ids(&range(day(2024, 6, 1), day(2024, 6, 30)), &reservations);
        assert_eq!(result, HashSet::from([VehicleId::new("V1"), VehicleId::new("V2")]));
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<Reservation> = Vec::new();
        assert!(find_unavailable_vehicle_ids(&range(day(2024, 6, 1), day(2024, 6, 2)), &none).is_empty());
    }

    proptest! {
        #[test]
        fn prop_cancelled_never_blocks(
            spans in proptest::collection::vec((0i64..60, 0i64..10), 0..20),
            q_start in 0i64..60,
            q_len in 0i64..10,
        ) {
            let base = day(2024, 1, 1);
            let reservations: Vec<Reservation> = spans
                .iter()
                .enumerate()
                .map(|(i, (s, len))| {
                    let start = base + chrono::Duration::days(*s);
                    booking(&format!("V{}", i), start, start + chrono::Duration::days(*len), ReservationStatus::Cancelled)
                })
                .collect();
            let start = base + chrono::Duration::days(q_start);
            let query = range(start, start + chrono::Duration::days(q_len));

            prop_assert!(find_unavailable_vehicle_ids(&query, &reservations).is_empty());
        }
    }
}
