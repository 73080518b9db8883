use axum::{extract::State, response::Json, routing::get, Router};

use super::common::success_response;
use crate::{services::dashboard::DashboardView, ApiResponse, AppState};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// Dashboard KPIs, charts and shortage alerts
pub async fn get_dashboard(State(state): State<AppState>) -> Json<ApiResponse<DashboardView>> {
    success_response(state.services.dashboard.view())
}
