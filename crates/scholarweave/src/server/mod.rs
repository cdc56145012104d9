//! HTTP server for the ScholarWeave gateway.
//!
//! Exposes service metadata, a health check, paper search and paper lookup
//! as JSON over HTTP. Each inbound request makes at most one upstream call;
//! handlers share no mutable state.

pub mod errors;
pub mod routes;

use std::sync::Arc;

use axum::Router;

use crate::client::{OpenAlexClient, WorkSource};
use crate::config::Config;
use crate::service::PaperService;

/// ScholarWeave HTTP server.
pub struct GatewayServer {
    config: Config,
    service: PaperService,
}

impl GatewayServer {
    /// Create a server backed by the OpenAlex client described in `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream client cannot be built.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = OpenAlexClient::new(&config)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a server over an arbitrary work source.
    #[must_use]
    pub fn with_source(config: Config, source: Arc<dyn WorkSource>) -> Self {
        let service = PaperService::new(source)
            .with_page_size(usize::try_from(config.search_page_size).unwrap_or(usize::MAX));
        Self { config, service }
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        routes::create_router(self.service.clone(), &self.config.cors_allow_origins)
    }

    /// Bind and serve until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run(self) -> anyhow::Result<()> {
        let router = self.router();

        tracing::info!(
            source = self.service.source_name(),
            upstream = %self.config.openalex_api_url,
            timeout = ?self.config.request_timeout,
            polite_pool = self.config.has_mailto(),
            "Starting ScholarWeave API"
        );

        let listener =
            tokio::net::TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        tracing::info!("HTTP server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for GatewayServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayServer")
            .field("host", &self.config.host)
            .field("port", &self.config.port)
            .field("service", &self.service)
            .finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
