use axum::{extract::State, routing::post, Router};

use super::common::{success_response, ApiJson};
use crate::{
    services::verification::{VerificationOutcome, VerificationRecord},
    ApiResult, AppState,
};

pub fn verification_routes() -> Router<AppState> {
    Router::new().route("/verification", post(verify_record))
}

/// Runs the simulated ledger check for a previously issued record
pub async fn verify_record(
    State(state): State<AppState>,
    ApiJson(record): ApiJson<VerificationRecord>,
) -> ApiResult<VerificationOutcome> {
    let outcome = state.services.verification.verify(record).await?;
    Ok(success_response(outcome))
}
