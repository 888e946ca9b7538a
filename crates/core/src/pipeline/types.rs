use crate::evidence::SearchError;
use crate::llm::LlmError;
use crate::models::SelectorError;

/// Parameters for one pipeline execution.
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// The claim to fact-check.
    pub query: String,
    /// Advisory cap on evidence sources.
    pub max_results: u32,
}

impl PipelineParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 5,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Error type for pipeline execution.
///
/// Step errors propagate unchanged after the adapters exhaust their retries;
/// the pipeline performs no local recovery.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Evidence search failed: {0}")]
    Search(#[from] SearchError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] LlmError),

    #[error("Model selection failed: {0}")]
    Selector(#[from] SelectorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params = PipelineParams::new("The sky is blue");
        assert_eq!(params.query, "The sky is blue");
        assert_eq!(params.max_results, 5);
    }

    #[test]
    fn test_params_builder() {
        let params = PipelineParams::new("claim").with_max_results(3);
        assert_eq!(params.max_results, 3);
    }

    #[test]
    fn test_error_display() {
        let err = PipelineError::Search(SearchError::NoResults);
        assert_eq!(
            err.to_string(),
            "Evidence search failed: No search results returned"
        );
    }
}
