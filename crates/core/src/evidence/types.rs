use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::llm::OutputSchema;

/// A single web source grounding a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Source title or headline.
    pub title: String,
    /// Source URL.
    pub url: String,
    /// Relevant excerpt or summary from the source.
    pub content: String,
}

impl EvidenceItem {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }
}

/// Wire shape of the provider's structured search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceList {
    pub results: Vec<EvidenceItem>,
}

/// JSON schema constraining the websearch step's structured output.
pub fn evidence_list_schema() -> OutputSchema {
    OutputSchema {
        name: "websearch_results",
        schema: json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "results": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "additionalProperties": false,
                        "properties": {
                            "title": { "type": "string" },
                            "url": { "type": "string" },
                            "content": { "type": "string" }
                        },
                        "required": ["title", "url", "content"]
                    }
                }
            },
            "required": ["results"]
        }),
    }
}
