//! Paper normalization.

use crate::error::ApiResult;
use crate::models::Paper;

/// Label for papers whose source is not recognized.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Canonical display name for a raw source label.
///
/// Matching is case-insensitive so already-canonical labels map to themselves.
#[must_use]
pub fn canonical_source(raw: &str) -> &'static str {
    match raw.trim().to_ascii_lowercase().as_str() {
        "openalex" => "OpenAlex",
        _ => UNKNOWN_SOURCE,
    }
}

/// Trim title and abstract in place and canonicalize the source label.
///
/// Idempotent. Returns `Result` so later enrichment steps can fail without
/// changing callers; it currently always succeeds.
#[allow(clippy::unnecessary_wraps)]
pub fn normalize_paper(paper: &mut Paper) -> ApiResult<()> {
    trim_in_place(&mut paper.title);
    trim_in_place(&mut paper.r#abstract);
    paper.source = canonical_source(&paper.source).to_string();
    Ok(())
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}
