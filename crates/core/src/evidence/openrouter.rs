//! OpenRouter-backed evidence search.
//!
//! Uses the provider's `:online` model suffix to enable built-in web search;
//! no separate search API is involved. The model is instructed to return its
//! findings in the [`EvidenceList`](super::EvidenceList) shape.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::llm::{ChatMessage, CompletionRequest, LlmError, LlmGateway};
use crate::models::{ModelSelector, ModelUseCase};

use super::types::{evidence_list_schema, EvidenceItem, EvidenceList};
use super::{EvidenceSearcher, SearchError};

/// Fixed instructions for the websearch step.
pub const WEBSEARCH_SYSTEM_PROMPT: &str = r#"You are a research assistant. Search the web for information about the given claim and return structured results.

Return your findings as a JSON object with this structure:
{
    "results": [
        {
            "title": "Source title/headline",
            "url": "https://source-url.com",
            "content": "Relevant excerpt or summary from the source"
        }
    ]
}

Include 3-5 relevant sources. Focus on authoritative sources like news sites, official organizations, and fact-checking websites."#;

/// Evidence searcher delegating to OpenRouter's grounded browsing.
pub struct OpenRouterSearcher {
    gateway: Arc<dyn LlmGateway>,
    selector: Arc<ModelSelector>,
}

impl OpenRouterSearcher {
    pub fn new(gateway: Arc<dyn LlmGateway>, selector: Arc<ModelSelector>) -> Self {
        Self { gateway, selector }
    }

    fn build_user_prompt(query: &str, max_results: u32) -> String {
        format!(
            "Search for evidence about this claim: {}\n\nReturn up to {} relevant sources.",
            query, max_results
        )
    }
}

#[async_trait]
impl EvidenceSearcher for OpenRouterSearcher {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<EvidenceItem>, SearchError> {
        let model = self.selector.websearch_model_for(ModelUseCase::Websearch)?;

        let messages = vec![
            ChatMessage::system(WEBSEARCH_SYSTEM_PROMPT),
            ChatMessage::user(Self::build_user_prompt(query, max_results)),
        ];

        debug!(model = %model, query = %truncate(query, 50), "Performing websearch");

        let request = CompletionRequest::new(model, messages);
        let value = match self
            .gateway
            .complete_structured(request, &evidence_list_schema())
            .await
        {
            Err(LlmError::EmptyResponse) => return Err(SearchError::NoResults),
            other => other?,
        };

        let list: EvidenceList = serde_json::from_value(value)
            .map_err(|e| SearchError::Gateway(LlmError::Json(e.to_string())))?;

        debug!(
            results = list.results.len(),
            query = %truncate(query, 50),
            "Websearch complete"
        );

        Ok(list.results)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelsConfig;
    use crate::testing::MockGateway;

    fn selector() -> Arc<ModelSelector> {
        Arc::new(ModelSelector::from_config(&ModelsConfig::default()))
    }

    #[tokio::test]
    async fn test_search_uses_online_model_and_prompts() {
        let gateway = Arc::new(MockGateway::new());
        gateway
            .set_structured_response(serde_json::json!({
                "results": [{
                    "title": "NASA: why the sky is blue",
                    "url": "https://nasa.gov/sky",
                    "content": "Rayleigh scattering."
                }]
            }))
            .await;

        let searcher = OpenRouterSearcher::new(gateway.clone(), selector());
        let results = searcher.search("The sky is blue", 5).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://nasa.gov/sky");

        let requests = gateway.recorded_requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "x-ai/grok-4-fast:online");
        assert!(requests[0].messages[0].content.contains("research assistant"));
        assert!(requests[0].messages[1].content.contains("The sky is blue"));
        assert!(requests[0].messages[1].content.contains("up to 5"));
    }

    #[tokio::test]
    async fn test_search_empty_results_is_ok() {
        let gateway = Arc::new(MockGateway::new());
        gateway
            .set_structured_response(serde_json::json!({ "results": [] }))
            .await;

        let searcher = OpenRouterSearcher::new(gateway, selector());
        let results = searcher.search("Unknowable claim", 3).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_empty_response_maps_to_no_results() {
        let gateway = Arc::new(MockGateway::new());
        gateway.set_error(LlmError::EmptyResponse).await;

        let searcher = OpenRouterSearcher::new(gateway, selector());
        let result = searcher.search("claim", 5).await;
        assert!(matches!(result, Err(SearchError::NoResults)));
    }

    #[tokio::test]
    async fn test_search_malformed_payload_fails() {
        let gateway = Arc::new(MockGateway::new());
        gateway
            .set_structured_response(serde_json::json!({ "hits": [] }))
            .await;

        let searcher = OpenRouterSearcher::new(gateway, selector());
        let result = searcher.search("claim", 5).await;
        assert!(matches!(
            result,
            Err(SearchError::Gateway(LlmError::Json(_)))
        ));
    }

    #[tokio::test]
    async fn test_search_unconfigured_model_fails() {
        let gateway = Arc::new(MockGateway::new());
        let selector = Arc::new(ModelSelector::from_config(&ModelsConfig {
            websearch: String::new(),
            evaluation: "openai/gpt-4o-mini".to_string(),
        }));

        let searcher = OpenRouterSearcher::new(gateway, selector);
        let result = searcher.search("claim", 5).await;
        assert!(matches!(result, Err(SearchError::Selector(_))));
    }
}
