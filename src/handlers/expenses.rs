use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use super::common::{success_response, validate_input, ApiQuery, PaginationParams};
use crate::{
    errors::ApiError,
    services::expenses::{ExpenseFilter, ExpensesView},
    ApiResponse, AppState,
};

pub fn expense_routes() -> Router<AppState> {
    Router::new().route("/expenses", get(list_expenses))
}

pub async fn list_expenses(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ExpenseFilter>,
    ApiQuery(paging): ApiQuery<PaginationParams>,
) -> Result<Json<ApiResponse<ExpensesView>>, ApiError> {
    validate_input(&paging)?;
    let view = state
        .services
        .expenses
        .list(&filter, paging.resolve(&state.config));
    Ok(success_response(view))
}
