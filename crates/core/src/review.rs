//! ClaimReview output document, modeled on the schema.org vocabulary.
//!
//! The evaluation step produces exactly one [`ClaimReview`] per claim; it is
//! returned to the caller verbatim, with no post-processing.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::llm::OutputSchema;

/// Fixed author identity stamped on every review.
pub const AUTHOR_NAME: &str = "ClaimCheck";

/// Base URL for review permalinks; the claim slug is appended.
pub const REVIEW_URL_BASE: &str = "https://claimcheck.dev/review/";

/// The 6-point verdict scale: rating value to human label.
pub const RATING_SCALE: [(&str, &str); 6] = [
    ("0", "Uncertain"),
    ("1", "Pants on Fire"),
    ("2", "False"),
    ("3", "Half True"),
    ("4", "Mostly True"),
    ("5", "True"),
];

/// Human label for a rating value, if the value is on the scale.
pub fn rating_label(value: &str) -> Option<&'static str> {
    RATING_SCALE
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

/// Schema.org Organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    #[serde(rename = "@type", default = "organization_type")]
    pub schema_type: String,
    #[serde(default = "default_author_name")]
    pub name: String,
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            schema_type: organization_type(),
            name: default_author_name(),
        }
    }
}

fn organization_type() -> String {
    "Organization".to_string()
}

fn default_author_name() -> String {
    AUTHOR_NAME.to_string()
}

/// Schema.org Rating on the fixed 0-5 scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    #[serde(rename = "@type", default = "rating_type")]
    pub schema_type: String,
    /// "0" through "5".
    #[serde(rename = "ratingValue")]
    pub rating_value: String,
    /// Human-readable verdict matching the scale label.
    #[serde(rename = "alternateName")]
    pub alternate_name: String,
    #[serde(rename = "bestRating", default = "best_rating")]
    pub best_rating: String,
    #[serde(rename = "worstRating", default = "worst_rating")]
    pub worst_rating: String,
}

impl Rating {
    pub fn new(rating_value: impl Into<String>, alternate_name: impl Into<String>) -> Self {
        Self {
            schema_type: rating_type(),
            rating_value: rating_value.into(),
            alternate_name: alternate_name.into(),
            best_rating: best_rating(),
            worst_rating: worst_rating(),
        }
    }

    /// Whether the value is on the scale and the label matches it.
    pub fn is_on_scale(&self) -> bool {
        rating_label(&self.rating_value) == Some(self.alternate_name.as_str())
    }
}

fn rating_type() -> String {
    "Rating".to_string()
}

fn best_rating() -> String {
    "5".to_string()
}

fn worst_rating() -> String {
    "1".to_string()
}

/// Schema.org CreativeWork holding the cited source URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemReviewed {
    #[serde(rename = "@type", default = "creative_work_type")]
    pub schema_type: String,
    /// Source URLs actually cited by the verdict, in citation order.
    pub url: Vec<String>,
}

impl ItemReviewed {
    pub fn new(url: Vec<String>) -> Self {
        Self {
            schema_type: creative_work_type(),
            url,
        }
    }
}

fn creative_work_type() -> String {
    "CreativeWork".to_string()
}

/// Schema.org ClaimReview - the sole output artifact of a fact-check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimReview {
    #[serde(rename = "@context", default = "schema_context")]
    pub context: String,
    #[serde(rename = "@type", default = "claim_review_type")]
    pub schema_type: String,
    /// The exact claim that was checked.
    #[serde(rename = "claimReviewed")]
    pub claim_reviewed: String,
    #[serde(default)]
    pub author: Organization,
    /// YYYY-MM-DD, the date the evaluation step executed.
    #[serde(rename = "datePublished")]
    pub date_published: String,
    #[serde(rename = "reviewRating")]
    pub review_rating: Rating,
    /// Permalink embedding a slug of the claim.
    pub url: String,
    /// 2-4 sentence justification citing evidence sources.
    #[serde(rename = "reviewBody")]
    pub review_body: String,
    #[serde(rename = "itemReviewed")]
    pub item_reviewed: ItemReviewed,
}

fn schema_context() -> String {
    "http://schema.org".to_string()
}

fn claim_review_type() -> String {
    "ClaimReview".to_string()
}

impl ClaimReview {
    /// Whether every cited URL originated from the supplied evidence set.
    pub fn cites_only(&self, evidence_urls: &[String]) -> bool {
        self.item_reviewed
            .url
            .iter()
            .all(|cited| evidence_urls.iter().any(|e| e == cited))
    }
}

/// JSON schema constraining the evaluation step's structured output.
pub fn claim_review_schema() -> OutputSchema {
    OutputSchema {
        name: "claim_review",
        schema: json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "@context": { "type": "string" },
                "@type": { "type": "string" },
                "claimReviewed": { "type": "string" },
                "author": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "@type": { "type": "string" },
                        "name": { "type": "string" }
                    },
                    "required": ["@type", "name"]
                },
                "datePublished": { "type": "string" },
                "reviewRating": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "@type": { "type": "string" },
                        "ratingValue": {
                            "type": "string",
                            "enum": ["0", "1", "2", "3", "4", "5"]
                        },
                        "alternateName": { "type": "string" },
                        "bestRating": { "type": "string" },
                        "worstRating": { "type": "string" }
                    },
                    "required": [
                        "@type",
                        "ratingValue",
                        "alternateName",
                        "bestRating",
                        "worstRating"
                    ]
                },
                "url": { "type": "string" },
                "reviewBody": { "type": "string" },
                "itemReviewed": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "@type": { "type": "string" },
                        "url": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["@type", "url"]
                }
            },
            "required": [
                "@context",
                "@type",
                "claimReviewed",
                "author",
                "datePublished",
                "reviewRating",
                "url",
                "reviewBody",
                "itemReviewed"
            ]
        }),
    }
}
