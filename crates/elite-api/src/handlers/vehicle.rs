//! Vehicle handlers
//!
//! Fleet availability view and admin passthrough to the fleet API.

use crate::dto::{ApiResponse, FleetQueryParams, VehicleCreateRequest, VehicleUpdateRequest};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use elite_core::models::VehicleId;
use elite_core::AppError;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Fleet with effective statuses for a date range
///
/// GET /api/v1/vehicles?from=&to=&search=&type=&status=
#[instrument(skip(state))]
pub async fn list_vehicles(
    state: web::Data<AppState>,
    query: web::Query<FleetQueryParams>,
) -> Result<HttpResponse, AppError> {
    let range = query.range_params().resolve(state.today())?;
    let filter = query.to_filter()?;

    debug!(range = %range, filter = ?filter, "Listing fleet availability");

    let view = state.availability.fleet_availability(&range, &filter).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(view)))
}

/// Distinct vehicle types
///
/// GET /api/v1/vehicles/types
#[instrument(skip(state))]
pub async fn list_vehicle_types(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let types = state.availability.vehicle_types().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(types)))
}

/// Register a vehicle
///
/// POST /api/v1/vehicles
#[instrument(skip(state, req))]
pub async fn create_vehicle(
    state: web::Data<AppState>,
    req: web::Json<VehicleCreateRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Vehicle creation validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let created = state.fleet.create_vehicle(&req.to_draft()).await?;

    info!(id = %created.id, name = %created.name, "Vehicle created");
    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        created,
        "Vehicle created successfully",
    )))
}

/// Update price, odometer, features and images
///
/// PUT /api/v1/vehicles/{id}
#[instrument(skip(state, req))]
pub async fn update_vehicle(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<VehicleUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Vehicle update validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let id = VehicleId::new(path.into_inner());
    let updated = state
        .fleet
        .update_vehicle(&id, &req.to_update())
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => AppError::VehicleNotFound(id.to_string()),
            other => other,
        })?;

    info!(id = %id, "Vehicle updated");
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        updated,
        "Vehicle updated successfully",
    )))
}

/// Remove a vehicle
///
/// DELETE /api/v1/vehicles/{id}
#[instrument(skip(state))]
pub async fn delete_vehicle(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = VehicleId::new(path.into_inner());

    state.fleet.delete_vehicle(&id).await.map_err(|e| match e {
        AppError::NotFound(_) => AppError::VehicleNotFound(id.to_string()),
        other => other,
    })?;

    info!(id = %id, "Vehicle deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Configure vehicle routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/vehicles")
            .route("", web::get().to(list_vehicles))
            .route("", web::post().to(create_vehicle))
            .route("/types", web::get().to(list_vehicle_types))
            .route("/{id}", web::put().to(update_vehicle))
            .route("/{id}", web::delete().to(delete_vehicle)),
    );
}
