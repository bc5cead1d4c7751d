//! HTTP request handlers

pub mod availability;
pub mod reservation;
pub mod vehicle;

pub use availability::configure as configure_availability;
pub use reservation::configure as configure_reservations;
pub use vehicle::configure as configure_vehicles;

use actix_web::{web, HttpResponse};
use elite_core::AppError;

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "elite-drive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Malformed JSON bodies answer with the standard error body
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

/// Malformed query strings answer with the standard error body
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

/// Configure every API route under `/api/v1`
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .app_data(query_config())
            .route("/health", web::get().to(health_check))
            .configure(configure_vehicles)
            .configure(configure_availability)
            .configure(configure_reservations),
    );
}
