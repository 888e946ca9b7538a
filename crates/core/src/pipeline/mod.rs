//! Fact-check pipeline.
//!
//! Deterministic two-step orchestration:
//! 1. Gather web evidence for the claim (websearch model, `:online`).
//! 2. Evaluate the claim against that evidence (structured output).
//!
//! The steps are strictly sequential; a failure in either step fails the
//! whole execution. No partial result is ever surfaced.

mod fact_check;
mod prompts;
mod types;

pub use fact_check::FactCheckPipeline;
pub use prompts::EVALUATION_SYSTEM_PROMPT;
pub use types::{PipelineError, PipelineParams};
