//! Model selection per pipeline use case.
//!
//! Maps logical use cases to concrete provider model identifiers, isolating
//! the pipeline from model-naming churn. The mapping is built once from
//! configuration and immutable afterwards.

use std::collections::HashMap;
use std::fmt;

use crate::config::ModelsConfig;

/// Identifier suffix enabling OpenRouter's built-in web search for a model
/// (e.g. "x-ai/grok-4-fast" becomes "x-ai/grok-4-fast:online"). This is an
/// OpenRouter-specific naming contract.
pub const ONLINE_SUFFIX: &str = ":online";

/// Logical pipeline steps that need a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelUseCase {
    /// Evidence gathering via web-grounded search.
    Websearch,
    /// Claim evaluation with structured output.
    Evaluation,
}

impl fmt::Display for ModelUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelUseCase::Websearch => write!(f, "websearch"),
            ModelUseCase::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// Error type for model selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    #[error("No model configured for use case: {0}")]
    UnknownUseCase(ModelUseCase),
}

/// Use-case to model mapping.
#[derive(Debug)]
pub struct ModelSelector {
    mapping: HashMap<ModelUseCase, String>,
}

impl ModelSelector {
    /// Build the selector from configuration. Empty identifiers are treated
    /// as unconfigured.
    pub fn from_config(config: &ModelsConfig) -> Self {
        let mut mapping = HashMap::new();
        if !config.websearch.is_empty() {
            mapping.insert(ModelUseCase::Websearch, config.websearch.clone());
        }
        if !config.evaluation.is_empty() {
            mapping.insert(ModelUseCase::Evaluation, config.evaluation.clone());
        }
        Self { mapping }
    }

    /// Model identifier for a use case.
    pub fn model_for(&self, use_case: ModelUseCase) -> Result<&str, SelectorError> {
        self.mapping
            .get(&use_case)
            .map(String::as_str)
            .ok_or(SelectorError::UnknownUseCase(use_case))
    }

    /// Model identifier with the online-search capability suffix appended.
    pub fn websearch_model_for(&self, use_case: ModelUseCase) -> Result<String, SelectorError> {
        Ok(format!("{}{}", self.model_for(use_case)?, ONLINE_SUFFIX))
    }
}
