//! Per-vehicle reservation interval index
//!
//! Answers the same question as [`super::find_unavailable_vehicle_ids`] in
//! O(V log n) per query instead of O(n), for callers that evaluate many date
//! ranges against one reservation snapshot (e.g. a calendar view).

use chrono::NaiveDate;
use elite_core::models::{DateRange, Reservation, VehicleId};
use std::collections::{HashMap, HashSet};

/// Blocking intervals of one vehicle, sorted by start
#[derive(Debug, Default, Clone)]
struct VehicleIntervals {
    starts: Vec<NaiveDate>,
    /// `max_end[i]` is the latest end among intervals `0..=i`
    max_end: Vec<NaiveDate>,
}

impl VehicleIntervals {
    fn build(mut intervals: Vec<(NaiveDate, NaiveDate)>) -> Self {
        intervals.sort_unstable();

        let mut starts = Vec::with_capacity(intervals.len());
        let mut max_end = Vec::with_capacity(intervals.len());
        let mut running: Option<NaiveDate> = None;

        for (start, end) in intervals {
            let latest = running.map_or(end, |r| r.max(end));
            running = Some(latest);
            starts.push(start);
            max_end.push(latest);
        }

        Self { starts, max_end }
    }

    /// Any interval with `start <= range.end` and `end >= range.start`
    fn overlaps(&self, range: &DateRange) -> bool {
        let candidates = self.starts.partition_point(|s| *s <= range.end());
        candidates > 0 && self.max_end[candidates - 1] >= range.start()
    }
}

/// Reservation snapshot indexed by vehicle
#[derive(Debug, Default, Clone)]
pub struct ReservationIndex {
    by_vehicle: HashMap<VehicleId, VehicleIntervals>,
}

impl ReservationIndex {
    /// Build the index from a reservation snapshot
    ///
    /// Non-blocking reservations (cancelled, completed) are dropped up front.
    pub fn build<'a, I>(reservations: I) -> Self
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let mut grouped: HashMap<VehicleId, Vec<(NaiveDate, NaiveDate)>> = HashMap::new();

        for reservation in reservations {
            if !reservation.status.blocks_availability() {
                continue;
            }
            let range = reservation.date_range();
            grouped
                .entry(reservation.vehicle_id.clone())
                .or_default()
                .push((range.start(), range.end()));
        }

        Self {
            by_vehicle: grouped
                .into_iter()
                .map(|(id, intervals)| (id, VehicleIntervals::build(intervals)))
                .collect(),
        }
    }

    /// Number of vehicles with at least one blocking reservation
    pub fn vehicle_count(&self) -> usize {
        self.by_vehicle.len()
    }

    /// Check whether a vehicle is free for the whole range
    pub fn is_vehicle_available(&self, vehicle_id: &VehicleId, range: &DateRange) -> bool {
        self.by_vehicle
            .get(vehicle_id)
            .map_or(true, |intervals| !intervals.overlaps(range))
    }

    /// Ids of vehicles held during `range`
    pub fn unavailable_vehicle_ids(&self, range: &DateRange) -> HashSet<VehicleId> {
        self.by_vehicle
            .iter()
            .filter(|(_, intervals)| intervals.overlaps(range))
            .map(|(id, _)| id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::find_unavailable_vehicle_ids;
    use elite_core::models::{ReservationId, ReservationStatus};
    use proptest::prelude::*;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
    }

    fn booking(vehicle: usize, start: i64, len: i64, status: ReservationStatus) -> Reservation {
        Reservation {
            id: ReservationId::new(format!("R{}-{}", vehicle, start)),
            vehicle_id: VehicleId::new(format!("V{}", vehicle)),
            user_id: None,
            start_date: day(start),
            end_date: day(start + len),
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_long_interval_hidden_behind_short_ones() {
        // A long early booking must still be found when later short bookings
        // sort after it and end before the query.
        let reservations = vec![
            booking(1, 0, 30, ReservationStatus::Active),
            booking(1, 2, 1, ReservationStatus::Active),
            booking(1, 5, 1, ReservationStatus::Active),
        ];
        let index = ReservationIndex::build(&reservations);
        let query = DateRange::new(day(20), day(22)).unwrap();

        assert!(!index.is_vehicle_available(&VehicleId::new("V1"), &query));
    }

    #[test]
    fn test_unknown_vehicle_is_available() {
        let index = ReservationIndex::build(&[]);
        let query = DateRange::single_day(day(0));
        assert!(index.is_vehicle_available(&VehicleId::new("V9"), &query));
        assert_eq!(index.vehicle_count(), 0);
    }

    #[test]
    fn test_cancelled_not_indexed() {
        let reservations = vec![booking(1, 0, 5, ReservationStatus::Cancelled)];
        let index = ReservationIndex::build(&reservations);
        assert_eq!(index.vehicle_count(), 0);
    }

    fn arb_status() -> impl Strategy<Value = ReservationStatus> {
        prop_oneof![
            Just(ReservationStatus::Active),
            Just(ReservationStatus::Confirmed),
            Just(ReservationStatus::Cancelled),
            Just(ReservationStatus::Completed),
        ]
    }

    proptest! {
        #[test]
        fn prop_index_matches_linear_scan(
            specs in proptest::collection::vec((0usize..5, 0i64..90, 0i64..15, arb_status()), 0..40),
            q_start in 0i64..100,
            q_len in 0i64..20,
        ) {
            let reservations: Vec<Reservation> = specs
                .into_iter()
                .map(|(v, s, len, status)| booking(v, s, len, status))
                .collect();
            let query = DateRange::new(day(q_start), day(q_start + q_len)).unwrap();

            let index = ReservationIndex::build(&reservations);
            prop_assert_eq!(
                index.unavailable_vehicle_ids(&query),
                find_unavailable_vehicle_ids(&query, &reservations)
            );
        }
    }
}
