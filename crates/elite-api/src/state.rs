//! Shared application state

use chrono::{Local, NaiveDate};
use elite_core::traits::{FleetWriter, ReservationSource, ReservationWriter, VehicleSource};
use elite_services::{AvailabilityService, BookingService};
use std::sync::Arc;

/// Services shared by every worker
pub struct AppState {
    pub availability: AvailabilityService,
    pub booking: BookingService,
    pub fleet: Arc<dyn FleetWriter>,
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    /// Wire every service to one backend implementing all collaborator traits
    pub fn new<B>(backend: Arc<B>) -> Self
    where
        B: VehicleSource + ReservationSource + ReservationWriter + FleetWriter + 'static,
    {
        Self {
            availability: AvailabilityService::new(backend.clone(), backend.clone()),
            booking: BookingService::new(backend.clone(), backend.clone(), backend.clone()),
            fleet: backend,
            fixed_today: None,
        }
    }

    /// Pin the reference day instead of reading the local clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// The reference day for validation, phases and default ranges
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
