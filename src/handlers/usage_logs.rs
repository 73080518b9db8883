use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use chrono::Local;

use super::common::{success_response, validate_input, ApiQuery, PaginationParams};
use crate::{
    errors::ApiError,
    services::usage_logs::{UsageLogFilter, UsageLogView},
    ApiResponse, AppState,
};

pub fn usage_log_routes() -> Router<AppState> {
    Router::new().route("/usage-logs", get(list_usage_logs))
}

/// Usage log table. Relative date ranges are anchored at local time.
pub async fn list_usage_logs(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<UsageLogFilter>,
    ApiQuery(paging): ApiQuery<PaginationParams>,
) -> Result<Json<ApiResponse<UsageLogView>>, ApiError> {
    validate_input(&paging)?;
    let view = state.services.usage_logs.list(
        &filter,
        paging.resolve(&state.config),
        Local::now().naive_local(),
    );
    Ok(success_response(view))
}
