//! Mock LLM gateway for testing.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::llm::{CompletionRequest, LlmError, LlmGateway, OutputSchema};

/// Mock implementation of the LlmGateway trait.
///
/// Provides controllable behavior for testing:
/// - Return scripted text or structured responses
/// - Queue one-shot responses for multi-call scenarios
/// - Inject errors, consumed in FIFO order before any response
/// - Record every request for assertions
pub struct MockGateway {
    text_response: Arc<RwLock<Option<String>>>,
    structured_default: Arc<RwLock<Option<Value>>>,
    structured_queue: Arc<RwLock<VecDeque<Value>>>,
    errors: Arc<RwLock<VecDeque<LlmError>>>,
    requests: Arc<RwLock<Vec<CompletionRequest>>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            text_response: Arc::new(RwLock::new(None)),
            structured_default: Arc::new(RwLock::new(None)),
            structured_queue: Arc::new(RwLock::new(VecDeque::new())),
            errors: Arc::new(RwLock::new(VecDeque::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the text returned by `complete`.
    pub async fn set_text_response(&self, text: impl Into<String>) {
        *self.text_response.write().await = Some(text.into());
    }

    /// Set the document returned by every `complete_structured` call.
    pub async fn set_structured_response(&self, value: Value) {
        *self.structured_default.write().await = Some(value);
    }

    /// Queue a one-shot structured response, consumed before the default.
    pub async fn push_structured_response(&self, value: Value) {
        self.structured_queue.write().await.push_back(value);
    }

    /// Replace any queued errors with a single one.
    pub async fn set_error(&self, error: LlmError) {
        let mut errors = self.errors.write().await;
        errors.clear();
        errors.push_back(error);
    }

    /// Queue an error; each call consumes at most one queued error.
    pub async fn push_error(&self, error: LlmError) {
        self.errors.write().await.push_back(error);
    }

    /// All requests seen so far, in call order.
    pub async fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.read().await.clone()
    }

    async fn record(&self, request: &CompletionRequest) {
        self.requests.write().await.push(request.clone());
    }

    async fn take_error(&self) -> Option<LlmError> {
        self.errors.write().await.pop_front()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    fn provider(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.record(&request).await;

        if let Some(error) = self.take_error().await {
            return Err(error);
        }

        match self.text_response.read().await.clone() {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(LlmError::EmptyResponse),
        }
    }

    async fn complete_structured(
        &self,
        request: CompletionRequest,
        _schema: &OutputSchema,
    ) -> Result<Value, LlmError> {
        self.record(&request).await;

        if let Some(error) = self.take_error().await {
            return Err(error);
        }

        if let Some(value) = self.structured_queue.write().await.pop_front() {
            return Ok(value);
        }

        match self.structured_default.read().await.clone() {
            Some(value) => Ok(value),
            None => Err(LlmError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ChatMessage;
    use serde_json::json;

    fn request() -> CompletionRequest {
        CompletionRequest::new("mock/model", vec![ChatMessage::user("hi")])
    }

    fn schema() -> OutputSchema {
        OutputSchema {
            name: "test",
            schema: json!({"type": "object"}),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_returns_empty() {
        let gateway = MockGateway::new();
        assert!(matches!(
            gateway.complete(request()).await,
            Err(LlmError::EmptyResponse)
        ));
        assert!(matches!(
            gateway.complete_structured(request(), &schema()).await,
            Err(LlmError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_queued_response_consumed_before_default() {
        let gateway = MockGateway::new();
        gateway.set_structured_response(json!({"kind": "default"})).await;
        gateway.push_structured_response(json!({"kind": "queued"})).await;

        let first = gateway
            .complete_structured(request(), &schema())
            .await
            .unwrap();
        assert_eq!(first["kind"], "queued");

        let second = gateway
            .complete_structured(request(), &schema())
            .await
            .unwrap();
        assert_eq!(second["kind"], "default");
    }

    #[tokio::test]
    async fn test_error_consumed_before_response() {
        let gateway = MockGateway::new();
        gateway.set_text_response("ok").await;
        gateway.push_error(LlmError::EmptyResponse).await;

        assert!(gateway.complete(request()).await.is_err());
        assert_eq!(gateway.complete(request()).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_records_requests() {
        let gateway = MockGateway::new();
        gateway.set_text_response("ok").await;
        let _ = gateway.complete(request()).await;

        let recorded = gateway.recorded_requests().await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].model, "mock/model");
    }
}
