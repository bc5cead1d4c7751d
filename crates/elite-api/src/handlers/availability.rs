//! Availability handler

use crate::dto::{ApiResponse, AvailabilityResponse, DateRangeParams};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use elite_core::models::VehicleId;
use elite_core::AppError;
use tracing::instrument;

/// Vehicles held by a reservation during a date range
///
/// GET /api/v1/availability?from=&to=
#[instrument(skip(state))]
pub async fn get_availability(
    state: web::Data<AppState>,
    query: web::Query<DateRangeParams>,
) -> Result<HttpResponse, AppError> {
    let range = query.resolve(state.today())?;

    let mut unavailable_vehicle_ids: Vec<VehicleId> = state
        .availability
        .unavailable_vehicle_ids(&range)
        .await?
        .into_iter()
        .collect();
    unavailable_vehicle_ids.sort();

    Ok(HttpResponse::Ok().json(ApiResponse::success(AvailabilityResponse {
        range,
        unavailable_vehicle_ids,
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/availability", web::get().to(get_availability));
}
