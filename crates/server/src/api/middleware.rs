//! Request logging middleware for API routes.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// Logs every request with a generated request ID and echoes the ID back in
/// the `X-Request-ID` response header.
///
/// Logged fields: request ID, method, path, status code, duration.
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status < 400 {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status,
            duration_ms = duration_ms,
            "Request success"
        );
    } else {
        error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status,
            duration_ms = duration_ms,
            "Request failed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    async fn dummy_handler() -> &'static str {
        "OK"
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let app = Router::new()
            .route("/test", get(dummy_handler))
            .layer(middleware::from_fn(request_logging_middleware));

        let request = Request::builder()
            .uri("/test")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let header = response.headers().get("x-request-id").unwrap();
        // UUID v4 in hyphenated form
        assert_eq!(header.to_str().unwrap().len(), 36);
    }

    #[tokio::test]
    async fn test_request_ids_are_unique() {
        let app = Router::new()
            .route("/test", get(dummy_handler))
            .layer(middleware::from_fn(request_logging_middleware));

        let first = app
            .clone()
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let second = app
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_ne!(
            first.headers().get("x-request-id").unwrap(),
            second.headers().get("x-request-id").unwrap()
        );
    }
}
