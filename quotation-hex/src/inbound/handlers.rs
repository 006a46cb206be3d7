//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use quotation_types::{FetchError, QuotationRepository, RateProvider};

use crate::QuotationService;

/// Application state shared across handlers.
pub struct AppState<R: QuotationRepository, P: RateProvider> {
    pub service: QuotationService<R, P>,
}

/// Wrapper to implement IntoResponse for FetchError (orphan rule workaround).
pub struct ApiError(pub FetchError);

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Only fetch failures reach the caller; store failures are swallowed
        // upstream of here. Error bodies are plain text.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to fetch quotation: {}", self.0),
        )
            .into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serves the latest USD-BRL quotation.
///
/// On success the response body is the upstream payload, byte-for-byte.
#[tracing::instrument(skip(state))]
pub async fn cotacao<R: QuotationRepository, P: RateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let fetched = state.service.fetch_and_store().await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], fetched.raw))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::QuotationService;
    use crate::inbound::HttpServer;
    use crate::service_tests::tests::{MockProvider, MockRepo, sample_quote};

    #[tokio::test]
    async fn test_cotacao_returns_verbatim_upstream_body() {
        let service = QuotationService::new(MockRepo::new(), MockProvider::bid("5.25"));
        let router = HttpServer::new(service).router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/cotacao")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, sample_quote("5.25").raw.as_bytes());
    }

    #[tokio::test]
    async fn test_cotacao_returns_500_plain_text_on_fetch_failure() {
        let service = QuotationService::new(MockRepo::new(), MockProvider::bad_status());
        let router = HttpServer::new(service).router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/cotacao")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("failed to fetch quotation"));
    }

    #[tokio::test]
    async fn test_cotacao_returns_200_when_store_fails() {
        let service = QuotationService::new(MockRepo::failing(), MockProvider::bid("5.25"));
        let router = HttpServer::new(service).router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/cotacao")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let service = QuotationService::new(MockRepo::new(), MockProvider::bid("5.25"));
        let router = HttpServer::new(service).router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
