use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use super::common::{success_response, validate_input, ApiPath, ApiQuery, PaginationParams};
use crate::{
    errors::ApiError,
    services::{
        inventory::{InventoryFilter, InventoryView},
        verification::VerificationRecord,
    },
    ApiResponse, ApiResult, AppState,
};

pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(list_inventory))
        .route("/inventory/:id/verification", get(medicine_verification))
}

/// Filtered, paginated medicine inventory
pub async fn list_inventory(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<InventoryFilter>,
    ApiQuery(paging): ApiQuery<PaginationParams>,
) -> Result<Json<ApiResponse<InventoryView>>, ApiError> {
    validate_input(&paging)?;
    let view = state
        .services
        .inventory
        .list(&filter, paging.resolve(&state.config));
    Ok(success_response(view))
}

/// Provenance record for one medicine
pub async fn medicine_verification(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> ApiResult<VerificationRecord> {
    let medicine = state.services.inventory.medicine(id)?;
    let record = state.services.verification.medicine_record(&medicine);
    info!(medicine_id = id, block = record.block_number, "Verification record issued");
    Ok(success_response(record))
}
