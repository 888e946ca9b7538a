//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of the external-service traits
//! (LLM gateway, evidence searcher), allowing comprehensive testing without
//! a real provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use claimcheck_core::testing::{fixtures, MockGateway, MockSearcher};
//!
//! let searcher = MockSearcher::new();
//! searcher.set_results(fixtures::sky_evidence()).await;
//!
//! let gateway = MockGateway::new();
//! gateway.set_structured_response(
//!     serde_json::to_value(fixtures::verdict("The sky is blue", "5")).unwrap(),
//! ).await;
//!
//! // Inject into FactCheckPipeline...
//! ```

mod mock_gateway;
mod mock_searcher;

pub use mock_gateway::MockGateway;
pub use mock_searcher::{MockSearcher, RecordedQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::evidence::EvidenceItem;
    use crate::review::{rating_label, ClaimReview, ItemReviewed, Organization, Rating, REVIEW_URL_BASE};

    /// Create an evidence item with placeholder content.
    pub fn evidence_item(title: &str, url: &str) -> EvidenceItem {
        EvidenceItem::new(title, url, format!("Excerpt from {}.", title))
    }

    /// Two-source evidence set about the sky being blue.
    pub fn sky_evidence() -> Vec<EvidenceItem> {
        vec![
            EvidenceItem::new(
                "NASA confirms sky is blue",
                "https://nasa.gov/sky",
                "The sky appears blue due to Rayleigh scattering of sunlight.",
            ),
            EvidenceItem::new(
                "Scientific American: Why is the sky blue?",
                "https://scientificamerican.com/sky-blue",
                "Blue light is scattered more than other colors because it travels in shorter waves.",
            ),
        ]
    }

    /// Create a complete verdict for `claim` with the given rating value.
    ///
    /// The alternate name is derived from the rating scale; cited URLs
    /// default to the sky fixture's first source.
    pub fn verdict(claim: &str, rating_value: &str) -> ClaimReview {
        let label = rating_label(rating_value).unwrap_or("Uncertain");
        let slug = claim
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect::<String>();

        ClaimReview {
            context: "http://schema.org".to_string(),
            schema_type: "ClaimReview".to_string(),
            claim_reviewed: claim.to_string(),
            author: Organization::default(),
            date_published: "2026-01-01".to_string(),
            review_rating: Rating::new(rating_value, label),
            url: format!("{}{}", REVIEW_URL_BASE, slug),
            review_body: "Confirmed by NASA research on Rayleigh scattering.".to_string(),
            item_reviewed: ItemReviewed::new(vec!["https://nasa.gov/sky".to_string()]),
        }
    }
}
