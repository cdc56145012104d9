//! HTTP routes for the gateway.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, RawPathParams, State, rejection::QueryRejection},
    http::{HeaderValue, Method},
    routing::get,
};
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::errors::{ErrorResponse, RequestContext, not_found, panic_response};
use crate::error::ApiError;
use crate::identifier::ID_REQUIRED;
use crate::models::{HealthStatus, Paper, RootInfo, SearchResponse, ServiceStatus};
use crate::service::{PaperService, QUERY_REQUIRED};

/// Listed by `GET /`.
pub const ENDPOINTS: &[&str] =
    &["/api/v1/health", "/api/v1/papers/search?q=your_query", "/api/v1/papers/:id"];

/// Shared state for HTTP handlers.
#[derive(Debug)]
pub struct HttpState {
    pub service: PaperService,
}

/// Raw search query pairs. Repeated keys are kept; the first `q` wins.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct SearchParams(pub Vec<(String, String)>);

impl SearchParams {
    /// First value of `q`, if present.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == "q").map(|(_, value)| value.as_str())
    }
}

/// Create the HTTP router.
///
/// `cors_origins` empty means any origin is allowed.
pub fn create_router(service: PaperService, cors_origins: &[String]) -> Router {
    let state = Arc::new(HttpState { service });

    Router::new()
        .route("/", get(root))
        .route("/api/v1/health", get(health))
        .route("/api/v1/papers/search", get(search_papers))
        .route("/api/v1/papers/", get(missing_paper_id))
        .route("/api/v1/papers/{id}", get(get_paper))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(cors_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        message: "Welcome to ScholarWeave API".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| (*e).to_string()).collect(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        services: ServiceStatus { api: "healthy".to_string(), openalex: "connected".to_string() },
    })
}

async fn search_papers(
    State(state): State<Arc<HttpState>>,
    ctx: RequestContext,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ErrorResponse> {
    let query = match params {
        Ok(Query(params)) => params.query().unwrap_or_default().to_string(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable search query string");
            return Err(ctx.reject(ApiError::missing("q", QUERY_REQUIRED)));
        }
    };

    state.service.search(&query).await.map(Json).map_err(|e| ctx.reject(e))
}

/// The id is read undecoded; the identifier normalizer does the decoding.
async fn get_paper(
    State(state): State<Arc<HttpState>>,
    ctx: RequestContext,
    params: RawPathParams,
) -> Result<Json<Paper>, ErrorResponse> {
    let raw_id = params.iter().find(|(key, _)| *key == "id").map(|(_, value)| value).unwrap_or_default();

    state.service.get_paper(raw_id).await.map(Json).map_err(|e| ctx.reject(e))
}

async fn missing_paper_id(ctx: RequestContext) -> ErrorResponse {
    ctx.reject(ApiError::missing("id", ID_REQUIRED))
}
