//! OpenAlex API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Explicit request and connect timeouts
//! - Optional polite-pool `mailto` parameter
//!
//! There is no retry and no cache: every call goes to the upstream once.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::{Config, defaults};
use crate::error::{ClientError, ClientResult};
use crate::models::{Work, WorkList};

/// Source of bibliographic works.
///
/// [`OpenAlexClient`] is the production implementation; tests substitute
/// their own.
#[async_trait::async_trait]
pub trait WorkSource: Send + Sync {
    /// Source name for logs.
    fn name(&self) -> &'static str;

    /// Free-text search returning one page of works.
    async fn search_works(&self, query: &str) -> ClientResult<WorkList>;

    /// Fetch a single work by its short id.
    async fn get_work(&self, id: &str) -> ClientResult<Work>;
}

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client.
    client: Client,

    /// API base URL.
    base_url: Url,

    /// Polite-pool contact address.
    mailto: Option<String>,

    /// Works requested per search.
    per_page: u32,

    /// Request timeout, kept for error reporting.
    timeout: Duration,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.openalex_api_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("OpenAlex URL cannot be a base: {}", config.openalex_api_url);
        }

        let client = Client::builder()
            .user_agent(concat!("scholarweave/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(defaults::MAX_IDLE_PER_HOST)
            .pool_idle_timeout(defaults::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url,
            mailto: config.mailto.clone(),
            per_page: config.search_page_size,
            timeout: config.request_timeout,
        })
    }

    /// Search works by free text.
    ///
    /// # Errors
    ///
    /// Returns error on network, status or decode failure.
    pub async fn search(&self, query: &str) -> ClientResult<WorkList> {
        let mut url = self.works_url(&[])?;
        url.query_pairs_mut()
            .append_pair("search", query)
            .append_pair("per_page", &self.per_page.to_string());
        self.get(url).await
    }

    /// Get a single work by id.
    ///
    /// # Errors
    ///
    /// Returns error on network, status or decode failure.
    pub async fn work(&self, id: &str) -> ClientResult<Work> {
        let url = self.works_url(&[id])?;
        self.get(url).await
    }

    /// Build `{base}/works[/segments...]`, percent-encoding each segment.
    fn works_url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("works")
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(&self, mut url: Url) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if let Some(ref mailto) = self.mailto {
            url.query_pairs_mut().append_pair("mailto", mailto);
        }

        tracing::debug!(url = %url, "OpenAlex request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout))?;

        let response = self.handle_response(response).await?;
        let body = response.bytes().await.map_err(|e| ClientError::from_transport(e, self.timeout))?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let resource = response.url().path().to_string();
        match status.as_u16() {
            404 => Err(ClientError::not_found(resource)),
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

#[async_trait::async_trait]
impl WorkSource for OpenAlexClient {
    fn name(&self) -> &'static str {
        "openalex"
    }

    async fn search_works(&self, query: &str) -> ClientResult<WorkList> {
        self.search(query).await
    }

    async fn get_work(&self, id: &str) -> ClientResult<Work> {
        self.work(id).await
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("base_url", &self.base_url.as_str())
            .field("per_page", &self.per_page)
            .field("has_mailto", &self.mailto.is_some())
            .finish()
    }
}
