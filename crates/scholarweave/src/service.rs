//! Paper search and lookup orchestration.
//!
//! Both paths run every upstream work through the same mapping
//! ([`Paper::from`]) and [`normalize_paper`], so search results and single
//! lookups have one shape.

use std::sync::Arc;

use crate::client::WorkSource;
use crate::config::defaults;
use crate::error::{ApiError, ApiResult};
use crate::identifier::normalize_identifier;
use crate::models::{Paper, SearchMeta, SearchResponse, Work};
use crate::normalize::normalize_paper;

/// Client-facing message for a missing search query.
pub const QUERY_REQUIRED: &str = "Query parameter 'q' is required";

/// Paper service shared by all request handlers.
#[derive(Clone)]
pub struct PaperService {
    source: Arc<dyn WorkSource>,
    page_size: usize,
}

impl PaperService {
    /// Create a new service over the given work source.
    #[must_use]
    pub fn new(source: Arc<dyn WorkSource>) -> Self {
        let page_size = usize::try_from(defaults::SEARCH_PAGE_SIZE).unwrap_or(usize::MAX);
        Self { source, page_size }
    }

    /// Cap on works returned per search, whatever the upstream sends.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Name of the underlying source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Search papers by free text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] for a blank query, or the upstream failure.
    pub async fn search(&self, query: &str) -> ApiResult<SearchResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApiError::missing("q", QUERY_REQUIRED));
        }

        let list = self.source.search_works(query).await.inspect_err(|e| {
            tracing::error!(source = self.source.name(), query, error = %e, "Search failed");
        })?;

        let results = list.results.into_iter().take(self.page_size).map(to_paper).collect::<ApiResult<Vec<_>>>()?;
        tracing::info!(query, count = list.meta.count, returned = results.len(), "Search complete");

        Ok(SearchResponse { meta: SearchMeta { count: list.meta.count }, results })
    }

    /// Look up one paper by a raw identifier (bare id, percent-encoded, or URL).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] for an empty id, or the upstream failure.
    pub async fn get_paper(&self, raw_id: &str) -> ApiResult<Paper> {
        let id = normalize_identifier(raw_id)?;

        let work = self.source.get_work(&id).await.inspect_err(|e| {
            tracing::error!(source = self.source.name(), id = %id, error = %e, "Lookup failed");
        })?;

        to_paper(work)
    }
}

impl std::fmt::Debug for PaperService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperService")
            .field("source", &self.source.name())
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn to_paper(work: Work) -> ApiResult<Paper> {
    let mut paper = Paper::from(work);
    normalize_paper(&mut paper)?;
    Ok(paper)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::{ClientError, ClientResult};
    use crate::models::{WorkList, WorkListMeta};

    /// Records lookups and returns canned data.
    #[derive(Default)]
    struct StubSource {
        works: Vec<Work>,
        fail: bool,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl WorkSource for StubSource {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn search_works(&self, query: &str) -> ClientResult<WorkList> {
            self.seen.lock().unwrap().push(query.to_string());
            if self.fail {
                return Err(ClientError::UnexpectedStatus { status: 502, message: "down".into() });
            }
            Ok(WorkList { meta: WorkListMeta { count: 99 }, results: self.works.clone() })
        }

        async fn get_work(&self, id: &str) -> ClientResult<Work> {
            self.seen.lock().unwrap().push(id.to_string());
            if self.fail {
                return Err(ClientError::not_found(id));
            }
            Ok(self.works.first().cloned().unwrap_or_default())
        }
    }

    fn work(title: &str) -> Work {
        Work {
            id: Some("https://openalex.org/W1".into()),
            title: Some(title.into()),
            r#abstract: Some(format!("  {title} abstract ")),
            ..Work::default()
        }
    }

    fn service(stub: StubSource) -> (PaperService, Arc<StubSource>) {
        let stub = Arc::new(stub);
        (PaperService::new(stub.clone()), stub)
    }

    #[tokio::test]
    async fn test_search_rejects_blank_query() {
        let (svc, stub) = service(StubSource::default());
        let err = svc.search("   ").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter { .. }));
        assert!(stub.seen.lock().unwrap().is_empty(), "no upstream call for blank query");
    }

    #[tokio::test]
    async fn test_search_normalizes_results() {
        let (svc, _) = service(StubSource { works: vec![work(" One "), work("Two")], ..Default::default() });
        let resp = svc.search("graphs").await.unwrap();
        assert_eq!(resp.meta.count, 99);
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].title, "One");
        assert_eq!(resp.results[0].r#abstract, "One  abstract");
        assert!(resp.results.iter().all(|p| p.source == "OpenAlex"));
    }

    #[tokio::test]
    async fn test_search_caps_oversized_upstream_page() {
        let works = (0..15).map(|i| work(&format!("Paper {i}"))).collect();
        let (svc, _) = service(StubSource { works, ..Default::default() });
        let resp = svc.search("graphs").await.unwrap();
        assert_eq!(resp.results.len(), 10);
        assert_eq!(resp.results[9].title, "Paper 9");

        let (svc, _) = service(StubSource { works: vec![work("A"), work("B"), work("C")], ..Default::default() });
        let resp = svc.with_page_size(2).search("graphs").await.unwrap();
        assert_eq!(resp.results.len(), 2);
    }

    #[tokio::test]
    async fn test_get_paper_normalizes_identifier() {
        let (svc, stub) = service(StubSource { works: vec![work("T")], ..Default::default() });
        let paper = svc.get_paper("https%3A%2F%2Fopenalex.org%2FW1").await.unwrap();
        assert_eq!(paper.title, "T");
        assert_eq!(paper.source, "OpenAlex");
        assert_eq!(stub.seen.lock().unwrap().as_slice(), ["W1".to_string()]);
    }

    #[tokio::test]
    async fn test_get_paper_empty_id() {
        let (svc, stub) = service(StubSource::default());
        assert!(matches!(svc.get_paper("").await, Err(ApiError::MissingParameter { .. })));
        assert!(stub.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let (svc, _) = service(StubSource { fail: true, ..Default::default() });
        assert!(matches!(svc.search("x").await, Err(ApiError::Upstream(_))));
        assert!(matches!(
            svc.get_paper("W1").await,
            Err(ApiError::Upstream(ClientError::NotFound { .. }))
        ));
    }
}
