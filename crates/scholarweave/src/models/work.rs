//! Work data model matching the OpenAlex `/works` schema.
//!
//! OpenAlex returns `null` for many fields, so every field decodes leniently.

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::abstract_text::{InvertedIndex, reconstruct};

/// A work record from OpenAlex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// OpenAlex work URL, e.g. `https://openalex.org/W2741809807`.
    #[serde(default)]
    pub id: Option<String>,

    /// Work title.
    #[serde(default)]
    pub title: Option<String>,

    /// Authorship entries in byline order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub authorships: Vec<Authorship>,

    /// Plain-text abstract, when the upstream provides one.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Abstract as word to positions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub abstract_inverted_index: InvertedIndex,

    /// DOI URL.
    #[serde(default)]
    pub doi: Option<String>,

    /// Number of works citing this one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cited_by_count: u64,
}

impl Work {
    /// Best available plain-text abstract.
    #[must_use]
    pub fn abstract_text(&self) -> String {
        reconstruct(self.r#abstract.as_deref().unwrap_or_default(), &self.abstract_inverted_index)
    }

    /// Get the title, or an empty string if missing.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Authors that carry at least a display name.
    pub fn named_authors(&self) -> impl Iterator<Item = &WorkAuthor> {
        self.authorships
            .iter()
            .filter_map(|a| a.author.as_ref())
            .filter(|a| a.display_name.as_deref().is_some_and(|n| !n.trim().is_empty()))
    }
}

/// One authorship entry of a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    /// The author.
    #[serde(default)]
    pub author: Option<WorkAuthor>,
}

/// Author as embedded in an OpenAlex authorship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkAuthor {
    /// OpenAlex author URL.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// ORCID URL.
    #[serde(default)]
    pub orcid: Option<String>,
}

/// Page of works returned by `/works?search=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkList {
    /// Result metadata.
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: WorkListMeta,

    /// Works in this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Work>,
}

/// Search metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkListMeta {
    /// Total number of matching works upstream.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_full_work() {
        let work: Work = serde_json::from_value(json!({
            "id": "https://openalex.org/W1",
            "title": "Attention",
            "authorships": [
                {"author": {"id": "https://openalex.org/A1", "display_name": "Ada", "orcid": null}}
            ],
            "abstract_inverted_index": {"hello": [0], "world": [1]},
            "doi": "https://doi.org/10.1/x",
            "cited_by_count": 42
        }))
        .unwrap();

        assert_eq!(work.id.as_deref(), Some("https://openalex.org/W1"));
        assert_eq!(work.abstract_text(), "hello world");
        assert_eq!(work.cited_by_count, 42);
        assert_eq!(work.named_authors().count(), 1);
    }

    #[test]
    fn test_decode_nulls() {
        let work: Work = serde_json::from_value(json!({
            "id": "https://openalex.org/W2",
            "title": null,
            "authorships": null,
            "abstract_inverted_index": null,
            "doi": null,
            "cited_by_count": null
        }))
        .unwrap();

        assert_eq!(work.title_or_default(), "");
        assert!(work.authorships.is_empty());
        assert_eq!(work.abstract_text(), "");
        assert_eq!(work.cited_by_count, 0);
    }

    #[test]
    fn test_literal_abstract_preferred() {
        let work: Work = serde_json::from_value(json!({
            "abstract": "Plain text",
            "abstract_inverted_index": {"other": [0]}
        }))
        .unwrap();
        assert_eq!(work.abstract_text(), "Plain text");
    }

    #[test]
    fn test_named_authors_skips_blank() {
        let work: Work = serde_json::from_value(json!({
            "authorships": [
                {"author": {"display_name": "Ada"}},
                {"author": {"display_name": "  "}},
                {"author": null},
                {}
            ]
        }))
        .unwrap();
        let names: Vec<_> = work.named_authors().filter_map(|a| a.display_name.as_deref()).collect();
        assert_eq!(names, vec!["Ada"]);
    }

    #[test]
    fn test_decode_work_list() {
        let list: WorkList = serde_json::from_value(json!({
            "meta": {"count": 1234, "per_page": 10},
            "results": [{"id": "https://openalex.org/W3", "title": "T"}]
        }))
        .unwrap();
        assert_eq!(list.meta.count, 1234);
        assert_eq!(list.results.len(), 1);
    }
}
