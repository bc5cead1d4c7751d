//! In-memory collaborators for service tests

use async_trait::async_trait;
use chrono::NaiveDate;
use elite_core::models::{
    DateRange, MaintenanceStatus, NewReservation, Reservation, ReservationId, ReservationStatus,
    Vehicle, VehicleId,
};
use elite_core::traits::{ReservationSource, ReservationWriter, VehicleSource};
use elite_core::{AppError, AppResult};
use std::sync::Mutex;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn vehicle(id: &str, vehicle_type: &str, status: Option<MaintenanceStatus>) -> Vehicle {
    Vehicle {
        id: VehicleId::new(id),
        name: format!("Vehicle {}", id),
        brand: "Toyota".to_string(),
        model: "Corolla".to_string(),
        capacity: 5,
        vehicle_type: vehicle_type.to_string(),
        status,
        ..Default::default()
    }
}

pub fn reservation(
    id: &str,
    vehicle_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id: ReservationId::new(id),
        vehicle_id: VehicleId::new(vehicle_id),
        user_id: Some("u-1".to_string()),
        start_date: start,
        end_date: end,
        status,
        created_at: None,
    }
}

/// Fleet and reservation store backed by vectors
pub struct MockFleet {
    vehicles: Mutex<Vec<Vehicle>>,
    reservations: Mutex<Vec<Reservation>>,
    failure: Mutex<Option<fn() -> AppError>>,
}

impl MockFleet {
    pub fn new(vehicles: Vec<Vehicle>, reservations: Vec<Reservation>) -> Self {
        Self {
            vehicles: Mutex::new(vehicles),
            reservations: Mutex::new(reservations),
            failure: Mutex::new(None),
        }
    }

    /// Make every later call fail with the given error
    pub fn fail_with(&self, error: fn() -> AppError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.lock().unwrap().len()
    }

    fn check(&self) -> AppResult<()> {
        match *self.failure.lock().unwrap() {
            Some(error) => Err(error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VehicleSource for MockFleet {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        self.check()?;
        Ok(self.vehicles.lock().unwrap().clone())
    }

    async fn find_vehicle(&self, id: &VehicleId) -> AppResult<Option<Vehicle>> {
        self.check()?;
        Ok(self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .find(|v| &v.id == id)
            .cloned())
    }
}

#[async_trait]
impl ReservationSource for MockFleet {
    async fn list_reservations(&self, _range: Option<&DateRange>) -> AppResult<Vec<Reservation>> {
        self.check()?;
        Ok(self.reservations.lock().unwrap().clone())
    }

    async fn find_reservation(&self, id: &ReservationId) -> AppResult<Option<Reservation>> {
        self.check()?;
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Reservation>> {
        self.check()?;
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReservationWriter for MockFleet {
    async fn create_reservation(&self, request: &NewReservation) -> AppResult<Reservation> {
        self.check()?;
        let mut reservations = self.reservations.lock().unwrap();
        let created = Reservation {
            id: ReservationId::new(format!("R{}", reservations.len() + 1)),
            vehicle_id: request.vehicle_id.clone(),
            user_id: request.user_id.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            status: ReservationStatus::Active,
            created_at: None,
        };
        reservations.push(created.clone());
        Ok(created)
    }

    async fn cancel_reservation(&self, id: &ReservationId) -> AppResult<Reservation> {
        self.check()?;
        let mut reservations = self.reservations.lock().unwrap();
        let reservation = reservations
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| AppError::ReservationNotFound(id.to_string()))?;
        reservation.status = ReservationStatus::Cancelled;
        Ok(reservation.clone())
    }
}
