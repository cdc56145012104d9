//! Configuration for the ScholarWeave gateway.

use std::time::Duration;

/// Upstream and server defaults.
pub mod defaults {
    use std::time::Duration;

    /// Base URL for the OpenAlex REST API.
    pub const OPENALEX_API: &str = "https://api.openalex.org";

    /// Upper bound on a single upstream call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Number of works requested per search (`per_page`).
    pub const SEARCH_PAGE_SIZE: u32 = 10;

    /// Maximum idle connections kept per upstream host.
    pub const MAX_IDLE_PER_HOST: usize = 10;

    /// Idle connection expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Default bind host.
    pub const HOST: &str = "0.0.0.0";

    /// Default bind port.
    pub const PORT: u16 = 3000;
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OpenAlex API (overridable for mock servers).
    pub openalex_api_url: String,

    /// Contact address for the OpenAlex polite pool (optional).
    pub mailto: Option<String>,

    /// Request timeout for upstream calls.
    pub request_timeout: Duration,

    /// Connection timeout for upstream calls.
    pub connect_timeout: Duration,

    /// Works requested per search.
    pub search_page_size: u32,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_allow_origins: Vec<String>,

    /// Bind host.
    pub host: String,

    /// Bind port.
    pub port: u16,
}

impl Config {
    /// Create a configuration pointing at the public OpenAlex API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            openalex_api_url: defaults::OPENALEX_API.to_string(),
            mailto: None,
            request_timeout: defaults::REQUEST_TIMEOUT,
            connect_timeout: defaults::CONNECT_TIMEOUT,
            search_page_size: defaults::SEARCH_PAGE_SIZE,
            cors_allow_origins: Vec::new(),
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
        }
    }

    /// Create a test configuration with the upstream pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            openalex_api_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            port: 0,
            ..Self::new()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `OPENALEX_API_URL`, `OPENALEX_MAILTO`, `OPENALEX_TIMEOUT_SECS`,
    /// `CORS_ALLOW_ORIGIN` (comma-separated), `HOST` and `PORT`.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("OPENALEX_API_URL") {
            config.openalex_api_url = url.trim_end_matches('/').to_string();
        }
        config.mailto = std::env::var("OPENALEX_MAILTO").ok().filter(|m| !m.trim().is_empty());

        if let Ok(secs) = std::env::var("OPENALEX_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid OPENALEX_TIMEOUT_SECS '{secs}': {e}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(origins) = std::env::var("CORS_ALLOW_ORIGIN") {
            config.cors_allow_origins = parse_origins(&origins);
        }

        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT '{port}': {e}"))?;
        }

        Ok(config)
    }

    /// Check if a polite-pool contact address is configured.
    #[must_use]
    pub const fn has_mailto(&self) -> bool {
        self.mailto.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma-separated origin list, dropping blanks.
#[must_use]
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}
