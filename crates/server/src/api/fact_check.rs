//! Fact-check API handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::error;

use claimcheck_core::{ClaimReview, PipelineParams};

use super::envelope::{ApiError, ApiResponse};
use crate::state::AppState;

/// Claim length bounds, in characters.
const MIN_QUERY_CHARS: usize = 1;
const MAX_QUERY_CHARS: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct FactCheckRequest {
    /// The claim/statement to fact-check.
    pub query: String,
}

fn validate(request: &FactCheckRequest) -> Result<(), ApiError> {
    let chars = request.query.chars().count();
    if chars < MIN_QUERY_CHARS {
        return Err(ApiError::validation(
            "query",
            format!("must be at least {} character", MIN_QUERY_CHARS),
        ));
    }
    if chars > MAX_QUERY_CHARS {
        return Err(ApiError::validation(
            "query",
            format!("must be at most {} characters", MAX_QUERY_CHARS),
        ));
    }
    Ok(())
}

/// POST /api/v1/fact-check
///
/// Fact-check a claim and return a structured ClaimReview verdict.
pub async fn fact_check(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FactCheckRequest>,
) -> Result<ApiResponse<ClaimReview>, ApiError> {
    validate(&body)?;

    let params = PipelineParams::new(body.query)
        .with_max_results(state.config().search.max_results);

    match state.pipeline().execute(&params).await {
        Ok(review) => Ok(ApiResponse::success(review)),
        Err(e) => {
            error!(error = %e, "Fact-check pipeline failed");
            Err(ApiError::internal(e.to_string()))
        }
    }
}
