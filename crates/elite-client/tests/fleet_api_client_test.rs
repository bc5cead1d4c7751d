//! HTTP tests for the fleet API client
//!
//! A small actix-web server on an ephemeral port stands in for the fleet API
//! and records what it was sent.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use chrono::NaiveDate;
use elite_client::FleetApiClient;
use elite_core::models::{DateRange, Reservation, ReservationId, VehicleId};
use elite_core::traits::{ReservationSource, VehicleSource};
use elite_core::AppError;
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Mutex;

#[derive(Default)]
struct Recorded {
    auth: Mutex<Vec<Option<String>>>,
    uris: Mutex<Vec<String>>,
}

impl Recorded {
    fn record(&self, req: &HttpRequest) {
        self.auth.lock().unwrap().push(
            req.headers()
                .get("authorization")
                .and_then(|h| h.to_str().ok())
                .map(str::to_string),
        );
        self.uris.lock().unwrap().push(req.uri().to_string());
    }

    fn uris(&self) -> Vec<String> {
        self.uris.lock().unwrap().clone()
    }
}

fn rav4() -> serde_json::Value {
    json!({"id": 1, "name": "RAV4", "vehicleType": {"type": "SUV"}, "pricePerDay": 45})
}

async fn list_vehicles(recorded: web::Data<Recorded>, req: HttpRequest) -> HttpResponse {
    recorded.record(&req);
    HttpResponse::Ok().json(json!([
        rav4(),
        {"id": 2, "name": "Corolla", "type": "Sedán", "pricePerDay": "30.00"}
    ]))
}

/// Only vehicle 1 is reachable by id
async fn get_vehicle(
    recorded: web::Data<Recorded>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    recorded.record(&req);
    if path.as_str() == "1" {
        HttpResponse::Ok().json(rav4())
    } else {
        HttpResponse::NotFound().json(json!({"message": "Vehicle not found"}))
    }
}

async fn list_reservations(recorded: web::Data<Recorded>, req: HttpRequest) -> HttpResponse {
    recorded.record(&req);
    HttpResponse::Ok().json(json!([
        {"id": 10, "vehicleId": 1, "startDate": "2024-06-10", "endDate": "2024-06-15", "status": "ACTIVE"},
        {"id": 11, "vehicleId": 2, "startDate": null, "endDate": "2024-06-15"},
        {"vehicleId": 2, "startDate": "2024-06-10", "endDate": "2024-06-15"},
        "garbage",
        {"id": 12, "vehicle": {"id": 2}, "startDate": "2024-06-20T00:00:00", "endDate": "2024-06-22"}
    ]))
}

async fn get_reservation(path: web::Path<String>) -> HttpResponse {
    match path.as_str() {
        "locked" => HttpResponse::Unauthorized().json(json!({"message": "token expired"})),
        "hidden" => HttpResponse::Forbidden().json(json!({"message": "not yours"})),
        "taken" => HttpResponse::Conflict().json(json!({"error": "already cancelled"})),
        "broken" => HttpResponse::InternalServerError().body("boom"),
        _ => HttpResponse::NotFound().finish(),
    }
}

async fn start_fleet_api() -> (String, web::Data<Recorded>) {
    let recorded = web::Data::new(Recorded::default());
    let shared = recorded.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(shared.clone())
            .route("/api/vehicles", web::get().to(list_vehicles))
            .route("/api/vehicles/{id}", web::get().to(get_vehicle))
            .route("/api/reservations", web::get().to(list_reservations))
            .route("/api/reservations/{id}", web::get().to(get_reservation))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    (format!("http://{}/api", addr), recorded)
}

#[actix_web::test]
async fn test_bearer_token_is_sent() {
    let (base_url, recorded) = start_fleet_api().await;

    let client = FleetApiClient::new(&base_url, 5, Some("secret".to_string())).unwrap();
    let vehicles = client.list_vehicles().await.unwrap();
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[1].vehicle_type, "Sedán");
    assert_eq!(vehicles[1].price_per_day, dec!(30.00));

    let anonymous = FleetApiClient::new(&base_url, 5, None).unwrap();
    anonymous.list_vehicles().await.unwrap();

    let auth = recorded.auth.lock().unwrap().clone();
    assert_eq!(auth, vec![Some("Bearer secret".to_string()), None]);
}

#[actix_web::test]
async fn test_find_vehicle_falls_back_to_list() {
    let (base_url, recorded) = start_fleet_api().await;
    let client = FleetApiClient::new(&base_url, 5, None).unwrap();

    let direct = client.find_vehicle(&VehicleId::new("1")).await.unwrap();
    assert_eq!(direct.map(|v| v.name), Some("RAV4".to_string()));

    let fallback = client.find_vehicle(&VehicleId::new("2")).await.unwrap();
    assert_eq!(fallback.map(|v| v.name), Some("Corolla".to_string()));

    let missing = client.find_vehicle(&VehicleId::new("9")).await.unwrap();
    assert!(missing.is_none());

    assert_eq!(
        recorded.uris(),
        vec![
            "/api/vehicles/1",
            "/api/vehicles/2",
            "/api/vehicles",
            "/api/vehicles/9",
            "/api/vehicles",
        ]
    );
}

#[actix_web::test]
async fn test_reservation_list_skips_malformed_entries() {
    let (base_url, recorded) = start_fleet_api().await;
    let client = FleetApiClient::new(&base_url, 5, None).unwrap();

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    )
    .unwrap();
    let reservations = client.list_reservations(Some(&range)).await.unwrap();

    let ids: Vec<String> = reservations.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, vec!["10", "12"]);
    assert_eq!(reservations[1].vehicle_id, VehicleId::new("2"));

    assert_eq!(
        recorded.uris(),
        vec!["/api/reservations?startDate=2024-06-01&endDate=2024-06-30"]
    );
}

async fn find(client: &FleetApiClient, id: &str) -> Result<Option<Reservation>, AppError> {
    client.find_reservation(&ReservationId::new(id)).await
}

#[actix_web::test]
async fn test_error_statuses_map_to_distinct_errors() {
    let (base_url, _) = start_fleet_api().await;
    let client = FleetApiClient::new(&base_url, 5, None).unwrap();

    assert!(find(&client, "missing").await.unwrap().is_none());

    match find(&client, "locked").await {
        Err(AppError::Unauthorized(message)) => assert_eq!(message, "token expired"),
        other => panic!("expected unauthorized, got {:?}", other),
    }
    assert!(matches!(find(&client, "hidden").await, Err(AppError::Forbidden(_))));
    assert!(matches!(find(&client, "taken").await, Err(AppError::Conflict(_))));
    assert!(matches!(find(&client, "broken").await, Err(AppError::Upstream(_))));
}
