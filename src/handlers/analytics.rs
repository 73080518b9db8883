use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use super::common::{success_response, ApiPath};
use crate::{
    services::{analytics::AnalyticsView, verification::VerificationRecord},
    ApiResponse, ApiResult, AppState,
};

/// Build the analytics Router
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/analytics", get(get_analytics))
        .route(
            "/analytics/predictions/:id/verification",
            get(prediction_verification),
        )
}

/// Demand forecast, supplier recommendations and AI predictions
pub async fn get_analytics(State(state): State<AppState>) -> Json<ApiResponse<AnalyticsView>> {
    success_response(state.services.analytics.view())
}

/// Provenance record for one AI prediction
pub async fn prediction_verification(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> ApiResult<VerificationRecord> {
    let prediction = state.services.analytics.prediction(id)?;
    Ok(success_response(
        state.services.verification.prediction_record(&prediction),
    ))
}
