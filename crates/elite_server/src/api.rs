//! Inara routes.

use crate::{ApiError, ApiResponse, HealthResponse};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::{delete, get},
};
use chrono::Utc;
use elite_error::InaraErrorKind;
use elite_inara::InaraApi;
use elite_models::{
    CommanderProfile, ShipLoadout, Station, StationMarket, SystemFaction, inara_timestamp,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Shared route state.
#[derive(Clone)]
pub struct AppState {
    api: Arc<dyn InaraApi>,
    configured: bool,
}

impl AppState {
    /// `configured` reports whether a valid configuration was loaded; it
    /// only feeds the health check.
    pub fn new(api: Arc<dyn InaraApi>, configured: bool) -> Self {
        Self { api, configured }
    }
}

type RouteResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Creates the Inara router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/inara/health", get(health_check))
        .route("/inara/commander/:name/profile", get(commander_profile))
        .route("/inara/commander/:name/ships", get(commander_ships))
        .route("/inara/commander/:name/current-ship", get(current_ship))
        .route("/inara/system/:name/factions", get(system_factions))
        .route("/inara/system/:name/stations", get(system_stations))
        .route("/inara/station/:id/market", get(station_market))
        .route("/inara/cache", delete(clear_cache))
        .with_state(state)
}

/// Probe the client with a profile lookup and report what happened.
#[instrument(skip(state))]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let configuration = if state.configured { "ok" } else { "missing" };

    let (status, inara_api) = if state.api.is_mock() {
        let status = if state.configured { "healthy" } else { "degraded" };
        (status, "mock")
    } else {
        match state.api.get_commander_profile(Some("test")).await {
            Ok(_) => ("healthy", "ok"),
            Err(e) => match e.kind() {
                InaraErrorKind::Authentication { .. } => ("degraded", "authentication_error"),
                InaraErrorKind::RateLimited(_) => ("degraded", "rate_limited"),
                _ => ("unhealthy", "error"),
            },
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        inara_api: inara_api.to_string(),
        configuration: configuration.to_string(),
        timestamp: inara_timestamp(Utc::now()),
    })
}

#[instrument(skip(state))]
async fn commander_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> RouteResult<CommanderProfile> {
    let response = match state.api.get_commander_profile(Some(name.as_str())).await? {
        Some(profile) => ApiResponse::ok("Commander profile retrieved successfully", profile),
        None => ApiResponse::not_found("Commander profile not found"),
    };
    Ok(Json(response))
}

#[instrument(skip(state))]
async fn commander_ships(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> RouteResult<Vec<ShipLoadout>> {
    let ships = state.api.get_commander_ships(Some(name.as_str())).await?;
    Ok(Json(ApiResponse::ok(
        format!("Retrieved {} ships", ships.len()),
        ships,
    )))
}

#[instrument(skip(state))]
async fn current_ship(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> RouteResult<ShipLoadout> {
    let response = match state.api.get_current_ship(Some(name.as_str())).await? {
        Some(ship) => ApiResponse::ok("Current ship retrieved successfully", ship),
        None => ApiResponse::not_found("Current ship not found"),
    };
    Ok(Json(response))
}

#[instrument(skip(state))]
async fn system_factions(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> RouteResult<Vec<SystemFaction>> {
    let factions = state.api.get_system_factions(&name).await?;
    Ok(Json(ApiResponse::ok(
        format!("Retrieved {} factions for {}", factions.len(), name),
        factions,
    )))
}

#[instrument(skip(state))]
async fn system_stations(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> RouteResult<Vec<Station>> {
    let stations = state.api.get_system_stations(&name).await?;
    Ok(Json(ApiResponse::ok(
        format!("Retrieved {} stations for {}", stations.len(), name),
        stations,
    )))
}

#[instrument(skip(state))]
async fn station_market(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> RouteResult<StationMarket> {
    let Path(id) = id?;
    let response = match state.api.get_station_market(id).await? {
        Some(market) => ApiResponse::ok("Station market data retrieved successfully", market),
        None => ApiResponse::not_found("Station market data not found"),
    };
    Ok(Json(response))
}

async fn clear_cache(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.api.clear_cache();
    info!("Inara cache cleared on request");
    Json(ApiResponse::ok("Inara response cache cleared", ()))
}
