//! Core library for the claimcheck fact-checking service.
//!
//! Fact-checks a natural-language claim in two sequential steps: gather web
//! evidence through the provider's grounded browsing, then ask an evaluation
//! model for a structured ClaimReview verdict. Every provider call goes
//! through the [`llm::LlmGateway`] chokepoint and the shared
//! [`retry::RetryPolicy`].

pub mod config;
pub mod evidence;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod retry;
pub mod review;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ModelsConfig,
    OpenRouterConfig, SanitizedConfig, SearchConfig, ServerConfig,
};
pub use evidence::{EvidenceItem, EvidenceSearcher, OpenRouterSearcher, SearchError};
pub use llm::{
    ChatMessage, ChatRole, CompletionRequest, LlmError, LlmGateway, OpenRouterGateway,
    OutputSchema,
};
pub use models::{ModelSelector, ModelUseCase, SelectorError};
pub use pipeline::{FactCheckPipeline, PipelineError, PipelineParams};
pub use retry::{RetryPolicy, Retryable};
pub use review::{
    rating_label, ClaimReview, ItemReviewed, Organization, Rating, AUTHOR_NAME, RATING_SCALE,
    REVIEW_URL_BASE,
};
