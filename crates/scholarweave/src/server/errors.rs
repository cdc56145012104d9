//! Error envelope rendering.
//!
//! Every failure leaves the server as an [`ErrorEnvelope`] JSON body. Handler
//! errors carry the status, time, path and method of the request.

use std::any::Any;
use std::convert::Infallible;

use axum::{
    Json,
    extract::FromRequestParts,
    http::{Method, StatusCode, Uri, request::Parts},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::models::ErrorEnvelope;

/// Method and path of the request being handled.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
}

impl RequestContext {
    /// Attach this request's context to an error.
    #[must_use]
    pub fn reject(&self, error: ApiError) -> ErrorResponse {
        ErrorResponse { error, context: self.clone() }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self { method: parts.method.clone(), path: parts.uri.path().to_string() })
    }
}

/// An [`ApiError`] bound to the request that produced it.
#[derive(Debug)]
pub struct ErrorResponse {
    pub error: ApiError,
    pub context: RequestContext,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let RequestContext { method, path } = self.context;

        if status.is_server_error() {
            tracing::error!(%method, %path, status = status.as_u16(), error = %self.error, "Request failed");
        } else {
            tracing::warn!(%method, %path, status = status.as_u16(), error = %self.error, "Request rejected");
        }

        let envelope = ErrorEnvelope::new(self.error.public_message())
            .with_status(status.as_u16())
            .timestamped()
            .at(method.as_str(), path);

        (status, Json(envelope)).into_response()
    }
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    let envelope = ErrorEnvelope::new(ApiError::RouteNotFound { path: uri.path().to_string() }.public_message())
        .with_status(StatusCode::NOT_FOUND.as_u16())
        .with_path(uri.path());
    (StatusCode::NOT_FOUND, Json(envelope)).into_response()
}

/// Convert a caught handler panic into a 500 envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Handler panicked");

    let error = ApiError::internal(detail);
    let envelope = ErrorEnvelope::new(error.public_message())
        .with_status(error.status().as_u16())
        .timestamped();
    (error.status(), Json(envelope)).into_response()
}
