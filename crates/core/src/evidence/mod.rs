//! Web evidence gathering for claims.
//!
//! This module provides an `EvidenceSearcher` trait for collecting web
//! sources about a claim, plus the OpenRouter-backed implementation that
//! delegates the actual searching to the provider's grounded-browsing
//! capability.

mod openrouter;
mod types;

pub use openrouter::{OpenRouterSearcher, WEBSEARCH_SYSTEM_PROMPT};
pub use types::*;

use async_trait::async_trait;

use crate::llm::LlmError;
use crate::models::SelectorError;
use crate::retry::Retryable;

/// Error type for evidence search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("No search results returned")]
    NoResults,

    #[error("Gateway error: {0}")]
    Gateway(#[from] LlmError),

    #[error("Model selection failed: {0}")]
    Selector(#[from] SelectorError),
}

impl Retryable for SearchError {
    fn is_retryable(&self) -> bool {
        match self {
            SearchError::NoResults => true,
            SearchError::Gateway(e) => e.is_retryable(),
            SearchError::Selector(_) => false,
        }
    }
}

/// Trait for evidence searchers.
#[async_trait]
pub trait EvidenceSearcher: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Gather web evidence about `query`.
    ///
    /// `max_results` is an advisory hint to the provider, not a hard cap;
    /// the returned sequence preserves the provider's relevance order. An
    /// empty result list is a valid outcome, distinct from
    /// [`SearchError::NoResults`] (no usable response at all).
    async fn search(&self, query: &str, max_results: u32)
        -> Result<Vec<EvidenceItem>, SearchError>;
}
