use crate::{
    config::AppConfig,
    errors::ApiError,
    services::PageRequest,
    tracing::{warn, ErrorKind},
    ApiResponse,
};
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

/// Wrap a view in the success envelope
pub fn success_response<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

fn rejected_input(source: &str, reason: String) -> ApiError {
    warn!(error_type = %ErrorKind::Validation, source, reason = %reason, "Request input rejected");
    ApiError::ValidationError(reason)
}

/// `Json` body extractor whose rejections use the error envelope
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| rejected_input("body", rejection.body_text()))
    }
}

/// `Query` extractor whose rejections use the error envelope
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| rejected_input("query", rejection.body_text()))
    }
}

/// `Path` extractor whose rejections use the error envelope
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| rejected_input("path", rejection.body_text()))
    }
}

/// Pagination parameters for list pages. Extracted as a separate `Query`
/// next to the page filter so both read the same query string.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    #[validate(range(min = 1))]
    pub per_page: Option<u64>,
}

impl PaginationParams {
    /// Fills missing values from configuration. `per_page` is clamped to the
    /// configured maximum when the page is sliced.
    pub fn resolve(&self, config: &AppConfig) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(1),
            per_page: self
                .per_page
                .unwrap_or_else(|| u64::from(config.api_default_page_size)),
            max_per_page: u64::from(config.api_max_page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_is_rejected() {
        let params = PaginationParams {
            page: Some(0),
            per_page: None,
        };
        assert!(matches!(
            validate_input(&params),
            Err(ApiError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn malformed_query_becomes_validation_error() {
        let request = axum::http::Request::builder()
            .uri("/inventory?page=abc")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = ApiQuery::<PaginationParams>::from_request_parts(&mut parts, &()).await;
        match result {
            Err(ApiError::ValidationError(reason)) => assert!(reason.contains("invalid digit")),
            other => panic!("expected validation error, got {:?}", other.map(|q| q.0)),
        }
    }

    #[tokio::test]
    async fn mistyped_json_field_becomes_validation_error() {
        let request = axum::http::Request::builder()
            .method("POST")
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(r#"{"page":"first"}"#))
            .unwrap();

        let result = ApiJson::<PaginationParams>::from_request(request, &()).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}
