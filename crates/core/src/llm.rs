//! LLM gateway abstraction and the OpenRouter implementation.
//!
//! All calls to the model provider go through the [`LlmGateway`] trait. The
//! gateway supports plain text completion and schema-constrained completion,
//! and wraps every outbound call in the shared retry policy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::OpenRouterConfig;
use crate::retry::{Retryable, RetryPolicy};

/// Error type for gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Response empty")]
    EmptyResponse,
}

impl Retryable for LlmError {
    fn is_retryable(&self) -> bool {
        match self {
            // Transport failures and absent/unparseable output are commonly
            // transient; client-side API errors (4xx except 429) are not.
            LlmError::Http(_) | LlmError::Json(_) | LlmError::EmptyResponse => true,
            LlmError::Api { status, .. } => *status >= 500 || *status == 429,
        }
    }
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// JSON schema constraint for structured output.
///
/// The schema is sent to the provider verbatim; the provider constrains its
/// output to conform.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    /// Schema name reported to the provider.
    pub name: &'static str,
    /// The JSON schema document.
    pub schema: Value,
}

/// Request for a completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Provider-specific model identifier.
    pub model: String,
    /// Ordered chat turns.
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Trait for LLM gateways.
///
/// Implementations are stateless per call; a long-lived connection handle may
/// be reused across calls but carries no request-scoped state.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Provider name (e.g., "openrouter").
    fn provider(&self) -> &str;

    /// Send a completion request and return the raw text content.
    ///
    /// Fails with [`LlmError::EmptyResponse`] when the provider returns no
    /// text content.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;

    /// Send a completion request constrained to `schema` and return the
    /// parsed JSON document.
    ///
    /// The response is parsed strictly; output that is absent or fails to
    /// parse is rejected, never coerced.
    async fn complete_structured(
        &self,
        request: CompletionRequest,
        schema: &OutputSchema,
    ) -> Result<Value, LlmError>;
}

// ============================================================================
// OpenRouter implementation
// ============================================================================

/// OpenRouter API gateway.
///
/// Speaks the OpenAI-compatible chat-completions protocol. Structured output
/// uses the `response_format: json_schema` contract; websearch-capable models
/// are addressed by the caller via the `:online` identifier suffix.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl OpenRouterGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: api_key.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Build a gateway from configuration, including the optional request
    /// timeout.
    pub fn from_config(config: &OpenRouterConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Single request/response exchange, no retry.
    async fn send(
        &self,
        request: &CompletionRequest,
        schema: Option<&OutputSchema>,
    ) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: schema.map(|s| ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaSpec {
                    name: s.name,
                    strict: true,
                    schema: &s.schema,
                },
            }),
        };

        debug!(model = %request.model, structured = schema.is_some(), "Sending completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url.trim_end_matches('/')))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        let status = response.status().as_u16();

        if status != 200 {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(LlmError::Api { status, message });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Json(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(content)
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    fn provider(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.retry
            .execute("openrouter_complete", || self.send(&request, None))
            .await
    }

    async fn complete_structured(
        &self,
        request: CompletionRequest,
        schema: &OutputSchema,
    ) -> Result<Value, LlmError> {
        self.retry
            .execute("openrouter_complete_structured", || async {
                let content = self.send(&request, Some(schema)).await?;
                serde_json::from_str::<Value>(&content).map_err(|e| LlmError::Json(e.to_string()))
            })
            .await
    }
}

// OpenRouter API wire types
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat<'a>>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaSpec<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaSpec<'a> {
    name: &'a str,
    strict: bool,
    schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}
