//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock provider dependencies injected, enabling full-stack testing
//! without a real model provider.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use claimcheck_core::testing::{MockGateway, MockSearcher};
use claimcheck_core::{
    load_config_from_str, EvidenceSearcher, FactCheckPipeline, LlmGateway, ModelSelector,
};
use claimcheck_server::api::create_router;
use claimcheck_server::state::AppState;

/// Re-export fixtures for test convenience
pub use claimcheck_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// Provides an in-process server with fully controllable mocks for:
/// - Evidence search (MockSearcher)
/// - The LLM gateway used by the evaluation step (MockGateway)
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock searcher - configure evidence results
    pub searcher: Arc<MockSearcher>,
    /// Mock gateway - configure evaluation responses
    pub gateway: Arc<MockGateway>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub fn new() -> Self {
        let config = load_config_from_str(
            r#"
[openrouter]
api_key = "test-key"
"#,
        )
        .expect("test config parses");

        let searcher = Arc::new(MockSearcher::new());
        let gateway = Arc::new(MockGateway::new());
        let selector = Arc::new(ModelSelector::from_config(&config.models));

        let pipeline = Arc::new(FactCheckPipeline::new(
            Arc::clone(&searcher) as Arc<dyn EvidenceSearcher>,
            Arc::clone(&gateway) as Arc<dyn LlmGateway>,
            selector,
        ));

        let state = Arc::new(AppState::new(config, pipeline));

        Self {
            router: create_router(state),
            searcher,
            gateway,
        }
    }

    /// Send a GET request to the router.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request builds");
        self.request(request).await
    }

    /// Send a POST request with a JSON body to the router.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        self.request(request).await
    }

    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request completes");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
