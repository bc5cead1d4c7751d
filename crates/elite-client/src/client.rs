//! HTTP client for the fleet and reservation REST API

use crate::error::ClientError;
use crate::wire::{reservation_from_value, WireReservation, WireVehicle, WireVehicleDraft};
use async_trait::async_trait;
use elite_core::config::FleetApiConfig;
use elite_core::models::{
    DateRange, NewReservation, Reservation, ReservationId, Vehicle, VehicleDraft, VehicleId,
    VehicleUpdate,
};
use elite_core::traits::{FleetWriter, ReservationSource, ReservationWriter, VehicleSource};
use elite_core::AppResult;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Longest error body echoed into an error message
const MAX_ERROR_BODY: usize = 200;

/// Client for the upstream fleet API
pub struct FleetApiClient {
    http_client: Client,
    base_url: Url,
    auth_token: Option<String>,
    timeout_secs: u64,
}

impl FleetApiClient {
    /// Create a new fleet API client
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. "http://localhost:8081/api"
    /// * `timeout_secs` - Per-request timeout
    /// * `auth_token` - Bearer token sent with every request
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        auth_token: Option<String>,
    ) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::Config("fleet API base URL is empty".to_string()));
        }

        let base_url = Url::parse(trimmed)
            .map_err(|e| ClientError::Config(format!("invalid fleet API base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "fleet API base URL cannot carry a path: {}",
                base_url
            )));
        }

        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
            auth_token: auth_token.filter(|t| !t.trim().is_empty()),
            timeout_secs,
        })
    }

    /// Create a client from the `fleet_api` config section
    pub fn from_config(config: &FleetApiConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.base_url,
            config.timeout_secs,
            config.auth_token.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Append path segments to the base URL, escaping each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("invalid fleet API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ClientError> {
        let builder = self.http_client.request(method, self.endpoint(segments)?);
        Ok(match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Send a request and check the status
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout_secs)
            } else {
                ClientError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });

        if status.is_server_error() {
            error!("Fleet API error: status={}, message={}", status, message);
        } else {
            warn!("Fleet API rejected request: status={}, message={}", status, message);
        }

        Err(ClientError::from_status(status.as_u16(), message))
    }

    /// Send a request and decode the JSON body
    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let body = self.execute(builder).await?.text().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to read response body: {}", e))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            ClientError::ParseError(format!(
                "Failed to parse JSON: {} - Body: {}",
                e,
                truncate(&body)
            ))
        })
    }

    /// Fetch a reservation list, skipping entries that cannot be decoded
    async fn fetch_reservations(
        &self,
        builder: RequestBuilder,
    ) -> Result<Vec<Reservation>, ClientError> {
        let entries: Vec<serde_json::Value> = self.fetch(builder).await?;
        let total = entries.len();

        let reservations: Vec<Reservation> = entries
            .into_iter()
            .filter_map(|entry| match reservation_from_value(entry) {
                Ok(reservation) => Some(reservation),
                Err(reason) => {
                    warn!("Skipping malformed reservation: {}", reason);
                    None
                }
            })
            .collect();

        debug!(
            "Fetched {} reservations ({} skipped)",
            reservations.len(),
            total - reservations.len()
        );
        Ok(reservations)
    }

    fn single_reservation(wire: WireReservation) -> Result<Reservation, ClientError> {
        Reservation::try_from(wire).map_err(ClientError::ParseError)
    }
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    Some(from_json.unwrap_or_else(|| truncate(body)))
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[async_trait]
impl VehicleSource for FleetApiClient {
    #[instrument(skip(self))]
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let wire: Vec<WireVehicle> = self.fetch(self.request(Method::GET, &["vehicles"])?).await?;
        debug!("Fetched {} vehicles", wire.len());
        Ok(wire.into_iter().map(Vehicle::from).collect())
    }

    /// Falls back to a lookup in the full list when the by-id endpoint 404s
    #[instrument(skip(self), fields(vehicle_id = %id))]
    async fn find_vehicle(&self, id: &VehicleId) -> AppResult<Option<Vehicle>> {
        let request = self.request(Method::GET, &["vehicles", id.as_str()])?;
        match self.fetch::<WireVehicle>(request).await {
            Ok(wire) => Ok(Some(wire.into())),
            Err(e) if e.is_not_found() => {
                debug!("Vehicle {} returned 404, searching the full list", id);
                let vehicles = self.list_vehicles().await?;
                Ok(vehicles.into_iter().find(|v| &v.id == id))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ReservationSource for FleetApiClient {
    #[instrument(skip(self))]
    async fn list_reservations(&self, range: Option<&DateRange>) -> AppResult<Vec<Reservation>> {
        let mut builder = self.request(Method::GET, &["reservations"])?;
        if let Some(range) = range {
            builder = builder.query(&[
                ("startDate", range.start().to_string()),
                ("endDate", range.end().to_string()),
            ]);
        }
        Ok(self.fetch_reservations(builder).await?)
    }

    #[instrument(skip(self), fields(reservation_id = %id))]
    async fn find_reservation(&self, id: &ReservationId) -> AppResult<Option<Reservation>> {
        let request = self.request(Method::GET, &["reservations", id.as_str()])?;
        match self.fetch::<WireReservation>(request).await {
            Ok(wire) => Ok(Some(Self::single_reservation(wire)?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Reservation>> {
        let request = self.request(Method::GET, &["reservations", "user", user_id])?;
        Ok(self.fetch_reservations(request).await?)
    }
}

#[async_trait]
impl ReservationWriter for FleetApiClient {
    #[instrument(skip(self, request), fields(vehicle_id = %request.vehicle_id))]
    async fn create_reservation(&self, request: &NewReservation) -> AppResult<Reservation> {
        let builder = self.request(Method::POST, &["reservations"])?.json(request);
        let wire: WireReservation = self.fetch(builder).await?;
        Ok(Self::single_reservation(wire)?)
    }

    #[instrument(skip(self), fields(reservation_id = %id))]
    async fn cancel_reservation(&self, id: &ReservationId) -> AppResult<Reservation> {
        let builder = self.request(Method::PUT, &["reservations", id.as_str(), "cancel"])?;
        let wire: WireReservation = self.fetch(builder).await?;
        Ok(Self::single_reservation(wire)?)
    }
}

#[async_trait]
impl FleetWriter for FleetApiClient {
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_vehicle(&self, draft: &VehicleDraft) -> AppResult<Vehicle> {
        let builder = self
            .request(Method::POST, &["vehicles"])?
            .json(&WireVehicleDraft::from(draft));
        let wire: WireVehicle = self.fetch(builder).await?;
        Ok(wire.into())
    }

    #[instrument(skip(self, update), fields(vehicle_id = %id))]
    async fn update_vehicle(&self, id: &VehicleId, update: &VehicleUpdate) -> AppResult<Vehicle> {
        let builder = self
            .request(Method::PUT, &["vehicles", id.as_str()])?
            .json(update);
        let wire: WireVehicle = self.fetch(builder).await?;
        Ok(wire.into())
    }

    #[instrument(skip(self), fields(vehicle_id = %id))]
    async fn delete_vehicle(&self, id: &VehicleId) -> AppResult<()> {
        self.execute(self.request(Method::DELETE, &["vehicles", id.as_str()])?)
            .await?;
        Ok(())
    }
}
