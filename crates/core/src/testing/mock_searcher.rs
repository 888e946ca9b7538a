//! Mock evidence searcher for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::evidence::{EvidenceItem, EvidenceSearcher, SearchError};

/// A recorded search for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedQuery {
    pub query: String,
    pub max_results: u32,
}

/// Mock implementation of the EvidenceSearcher trait.
///
/// Returns configured evidence items, records queries, and can fail the next
/// call with an injected error.
pub struct MockSearcher {
    results: Arc<RwLock<Vec<EvidenceItem>>>,
    next_error: Arc<RwLock<Option<SearchError>>>,
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
}

impl Default for MockSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearcher {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            queries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the evidence returned by every search.
    pub async fn set_results(&self, results: Vec<EvidenceItem>) {
        *self.results.write().await = results;
    }

    /// Fail the next search with `error`, then revert to returning results.
    pub async fn set_error(&self, error: SearchError) {
        *self.next_error.write().await = Some(error);
    }

    /// All queries seen so far, in call order.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl EvidenceSearcher for MockSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<EvidenceItem>, SearchError> {
        self.queries.write().await.push(RecordedQuery {
            query: query.to_string(),
            max_results,
        });

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.results.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_configured_results() {
        let searcher = MockSearcher::new();
        searcher
            .set_results(vec![EvidenceItem::new("t", "https://u", "c")])
            .await;

        let results = searcher.search("query", 5).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://u");
    }

    #[tokio::test]
    async fn test_error_fires_once() {
        let searcher = MockSearcher::new();
        searcher.set_error(SearchError::NoResults).await;

        assert!(searcher.search("q", 5).await.is_err());
        assert!(searcher.search("q", 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_records_queries() {
        let searcher = MockSearcher::new();
        let _ = searcher.search("first", 3).await;
        let _ = searcher.search("second", 5).await;

        let queries = searcher.recorded_queries().await;
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].query, "first");
        assert_eq!(queries[0].max_results, 3);
        assert_eq!(queries[1].query, "second");
    }
}
