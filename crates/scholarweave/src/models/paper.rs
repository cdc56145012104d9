//! Normalized paper model returned to clients.

use serde::{Deserialize, Serialize};

use super::{Work, WorkAuthor};

/// Raw source label stamped on papers mapped from OpenAlex works.
pub const SOURCE_OPENALEX: &str = "openalex";

/// A normalized academic paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Upstream work identifier.
    pub id: String,

    /// Title.
    pub title: String,

    /// Plain-text abstract (never an inverted index).
    pub r#abstract: String,

    /// DOI URL, or empty.
    pub doi: String,

    /// Authors in byline order.
    pub authors: Vec<Author>,

    /// Citation count.
    pub cited_by_count: u64,

    /// Source label, e.g. "OpenAlex".
    pub source: String,
}

impl From<Work> for Paper {
    fn from(work: Work) -> Self {
        let title = work.title_or_default().to_string();
        let r#abstract = work.abstract_text();
        let authors = work.named_authors().map(Author::from).collect();

        Self {
            id: work.id.unwrap_or_default(),
            title,
            r#abstract,
            doi: work.doi.unwrap_or_default(),
            authors,
            cited_by_count: work.cited_by_count,
            source: SOURCE_OPENALEX.to_string(),
        }
    }
}

/// Paper author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,

    /// External author identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// ORCID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
}

impl From<&WorkAuthor> for Author {
    fn from(author: &WorkAuthor) -> Self {
        let non_empty = |s: &Option<String>| s.as_ref().filter(|v| !v.is_empty()).cloned();
        Self {
            name: author.display_name.clone().unwrap_or_default(),
            id: non_empty(&author.id),
            orcid: non_empty(&author.orcid),
        }
    }
}
