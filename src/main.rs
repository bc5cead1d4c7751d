//! Elite Drive Backend Server
//!
//! Backend-for-frontend for the rental booking site and the admin console.
//! Computes availability and prices on top of the remote fleet and
//! reservation API.

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer};
use elite_api::{configure_api, AppState};
use elite_client::FleetApiClient;
use elite_core::AppConfig;
use std::env;
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "elite_drive={lvl},elite_api={lvl},elite_services={lvl},elite_client={lvl},actix_web=info",
            lvl = log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting Elite Drive backend v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let client = FleetApiClient::from_config(&config.fleet_api).map_err(|e| {
        error!("Failed to build fleet API client: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    if config.fleet_api.auth_token.is_none() {
        warn!("No fleet API token configured, requests will be sent unauthenticated");
    }

    info!(
        base_url = %config.fleet_api.base_url,
        timeout_secs = config.fleet_api.timeout_secs,
        "Fleet API client configured"
    );

    let state = web::Data::new(AppState::new(Arc::new(client)));
    let cors_origins = config.server.cors_origin_list();
    let bind_addr = config.server_addr();
    let workers = config.server.workers.max(1);

    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, workers
    );

    HttpServer::new(move || {
        let cors = if cors_origins.iter().any(|o| o == "*") {
            Cors::default().allow_any_origin()
        } else {
            cors_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        };
        let cors = cors
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_api)
            // Root redirect to health
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/api/v1/health"))
                        .finish()
                }),
            )
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await
}
