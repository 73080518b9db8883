use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use super::common::{success_response, ApiQuery};
use crate::{
    services::suppliers::{SupplierFilter, SuppliersView},
    ApiResponse, AppState,
};

pub fn supplier_routes() -> Router<AppState> {
    Router::new().route("/suppliers", get(list_suppliers))
}

/// Suppliers split into recommended and other
pub async fn list_suppliers(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<SupplierFilter>,
) -> Json<ApiResponse<SuppliersView>> {
    success_response(state.services.suppliers.list(&filter))
}
