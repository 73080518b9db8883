use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use super::common::{success_response, validate_input, ApiJson};
use crate::{
    config::validate_simulation_speed,
    errors::ApiError,
    services::digital_twin::DigitalTwinView,
    simulation::{SimulationSnapshot, SimulationSpeed},
    ApiResponse, ApiResult, AppState,
};

pub fn simulation_routes() -> Router<AppState> {
    Router::new()
        .route("/simulation", get(get_digital_twin))
        .route("/simulation/pause", post(pause))
        .route("/simulation/resume", post(resume))
        .route("/simulation/reset", post(reset))
        .route("/simulation/speed", post(change_speed))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SpeedRequest {
    /// One of 0.5, 1, 2 or 4
    #[validate(custom = "validate_simulation_speed")]
    pub speed: f64,
}

/// Department and inventory twin with the latest live metrics
pub async fn get_digital_twin(State(state): State<AppState>) -> Json<ApiResponse<DigitalTwinView>> {
    let live = state.simulation.snapshot();
    success_response(state.services.digital_twin.view(live))
}

pub async fn pause(State(state): State<AppState>) -> ApiResult<SimulationSnapshot> {
    let snapshot = state.simulation.pause().await?;
    info!(tick = snapshot.tick, "Simulation paused");
    Ok(success_response(snapshot))
}

pub async fn resume(State(state): State<AppState>) -> ApiResult<SimulationSnapshot> {
    let snapshot = state.simulation.resume().await?;
    info!(tick = snapshot.tick, "Simulation resumed");
    Ok(success_response(snapshot))
}

/// Restores the generator defaults. Nothing else in the application is reset.
pub async fn reset(State(state): State<AppState>) -> ApiResult<SimulationSnapshot> {
    let snapshot = state.simulation.reset().await?;
    info!("Simulation reset");
    Ok(success_response(snapshot))
}

pub async fn change_speed(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SpeedRequest>,
) -> Result<Json<ApiResponse<SimulationSnapshot>>, ApiError> {
    validate_input(&request)?;
    let speed = SimulationSpeed::from_multiplier(request.speed).ok_or_else(|| {
        ApiError::ValidationError(format!("Unsupported speed {}", request.speed))
    })?;
    let snapshot = state.simulation.set_speed(speed).await?;
    info!(speed = speed.multiplier(), "Simulation speed changed");
    Ok(success_response(snapshot))
}
