//! Work identifier normalization.
//!
//! Clients may send a bare OpenAlex id (`W2741809807`), a percent-encoded id,
//! or the full work URL (`https://openalex.org/W2741809807`). All of them
//! resolve to the short id used in the upstream `/works/{id}` path.

use std::borrow::Cow;

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Client-facing message for an absent identifier.
pub const ID_REQUIRED: &str = "Paper ID is required";

/// Resolve a raw path identifier to a canonical short work id.
///
/// 1. Percent-decode; on invalid UTF-8 the input is kept as is.
/// 2. Empty (or whitespace-only) input is a client error.
/// 3. `http://` and `https://` inputs are replaced by their final non-empty
///    path segment. If the URL does not parse, the decoded string is used.
///
/// # Example
///
/// ```
/// use scholarweave::identifier::normalize_identifier;
///
/// assert_eq!(normalize_identifier("https://openalex.org/W123").unwrap(), "W123");
/// assert_eq!(normalize_identifier("%57123").unwrap(), "W123");
/// assert!(normalize_identifier("").is_err());
/// ```
pub fn normalize_identifier(raw: &str) -> ApiResult<String> {
    let decoded: Cow<'_, str> = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
    let decoded = decoded.trim();

    if decoded.is_empty() {
        return Err(ApiError::missing("id", ID_REQUIRED));
    }

    if !is_http_url(decoded) {
        return Ok(decoded.to_string());
    }

    match Url::parse(decoded) {
        Ok(url) => last_segment(&url)
            .map(|segment| urlencoding::decode(segment).map_or_else(|_| segment.to_string(), Cow::into_owned))
            .ok_or_else(|| ApiError::missing("id", ID_REQUIRED)),
        Err(err) => {
            tracing::debug!(id = %decoded, error = %err, "Identifier looked like a URL but did not parse");
            Ok(decoded.to_string())
        }
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn last_segment(url: &Url) -> Option<&str> {
    url.path_segments()?.filter(|s| !s.is_empty()).next_back()
}
