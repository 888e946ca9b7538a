//! Fact-check pipeline orchestrator.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::evidence::{EvidenceItem, EvidenceSearcher};
use crate::llm::{ChatMessage, CompletionRequest, LlmError, LlmGateway};
use crate::models::{ModelSelector, ModelUseCase};
use crate::review::{claim_review_schema, ClaimReview};

use super::prompts;
use super::types::{PipelineError, PipelineParams};

/// Two-step fact-check pipeline: websearch, then evaluation.
///
/// Holds its collaborators as injected, immutable components; all shared
/// state is read-only after construction, so concurrent executions are fully
/// independent.
pub struct FactCheckPipeline {
    searcher: Arc<dyn EvidenceSearcher>,
    gateway: Arc<dyn LlmGateway>,
    selector: Arc<ModelSelector>,
}

impl FactCheckPipeline {
    pub fn new(
        searcher: Arc<dyn EvidenceSearcher>,
        gateway: Arc<dyn LlmGateway>,
        selector: Arc<ModelSelector>,
    ) -> Self {
        Self {
            searcher,
            gateway,
            selector,
        }
    }

    /// Run the full pipeline for one claim.
    ///
    /// Returns the verdict exactly as the evaluation step produced it. An
    /// empty evidence list is passed through to evaluation, not treated as
    /// an error; a failed step fails the execution as a whole.
    pub async fn execute(&self, params: &PipelineParams) -> Result<ClaimReview, PipelineError> {
        info!(query = %truncate(&params.query, 50), "Starting fact-check pipeline");

        let evidence = self
            .searcher
            .search(&params.query, params.max_results)
            .await?;

        info!(results = evidence.len(), "Search complete");

        let review = self.evaluate(&params.query, &evidence).await?;

        info!(
            rating = %review.review_rating.rating_value,
            verdict = %review.review_rating.alternate_name,
            "Evaluation complete"
        );

        Ok(review)
    }

    async fn evaluate(
        &self,
        query: &str,
        evidence: &[EvidenceItem],
    ) -> Result<ClaimReview, PipelineError> {
        // Captured once, at the instant evaluation begins; everything below
        // uses this value so the prompt and datePublished cannot disagree.
        let current_date = Utc::now().format("%Y-%m-%d").to_string();

        let system_prompt = prompts::evaluation_system_prompt(&current_date);
        let user_prompt = build_user_prompt(query, evidence, &current_date);

        let model = self.selector.model_for(ModelUseCase::Evaluation)?;
        let request = CompletionRequest::new(
            model,
            vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
        );

        let value = self
            .gateway
            .complete_structured(request, &claim_review_schema())
            .await
            .map_err(PipelineError::Evaluation)?;

        let review: ClaimReview = serde_json::from_value(value)
            .map_err(|e| PipelineError::Evaluation(LlmError::Json(e.to_string())))?;

        let evidence_urls: Vec<String> = evidence.iter().map(|e| e.url.clone()).collect();
        if !review.cites_only(&evidence_urls) {
            warn!(
                query = %truncate(query, 50),
                "Verdict cites URLs outside the supplied evidence"
            );
        }

        Ok(review)
    }
}

/// Render the user prompt: claim, then every evidence item in received
/// order, then the date.
fn build_user_prompt(query: &str, evidence: &[EvidenceItem], current_date: &str) -> String {
    let context = evidence
        .iter()
        .map(|r| format!("**{}**\nURL: {}\n{}", r.title, r.url, r.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Claim to fact-check:\n{}\n\nSearch Results:\n{}\n\nToday's date: {}\n\nEvaluate this claim and return a ClaimReview JSON.\n",
        query, context, current_date
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
