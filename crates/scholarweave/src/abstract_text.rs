//! Abstract reconstruction from OpenAlex inverted indexes.
//!
//! OpenAlex does not ship abstracts as plain text. Instead each work carries an
//! `abstract_inverted_index` mapping every word to the positions it occupies:
//!
//! ```json
//! {"Despite": [0], "growing": [1], "interest": [2, 50]}
//! ```
//!
//! [`reconstruct`] turns that back into linear text.

use std::collections::{BTreeMap, HashMap};

/// Word to zero-based positions.
///
/// Positions are signed so that malformed negative entries decode and can be
/// skipped instead of failing the whole response.
pub type InvertedIndex = HashMap<String, Vec<i64>>;

/// Produce the best available plain-text abstract.
///
/// A non-empty `literal` is returned unchanged. Otherwise the words of `index`
/// are laid out by position and joined with single spaces. Positions nobody
/// claims are skipped, so gaps never produce extra separators. Negative
/// positions are ignored.
///
/// When two words claim the same position the one visited last wins. Map
/// iteration order is unspecified, so which word that is is
/// implementation-defined; it never panics.
///
/// # Example
///
/// ```
/// use scholarweave::abstract_text::{reconstruct, InvertedIndex};
///
/// let index: InvertedIndex =
///     [("the".to_string(), vec![0]), ("cat".to_string(), vec![1])].into_iter().collect();
/// assert_eq!(reconstruct("", &index), "the cat");
/// assert_eq!(reconstruct("Given abstract", &index), "Given abstract");
/// ```
#[must_use]
pub fn reconstruct(literal: &str, index: &InvertedIndex) -> String {
    if !literal.is_empty() {
        return literal.to_string();
    }
    if index.is_empty() {
        return String::new();
    }

    // Sparse slots: a huge max position must not allocate a huge buffer.
    let mut slots: BTreeMap<usize, &str> = BTreeMap::new();
    for (word, positions) in index {
        for &pos in positions {
            let Ok(pos) = usize::try_from(pos) else {
                continue;
            };
            slots.insert(pos, word.as_str());
        }
    }

    slots.into_values().filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(entries: &[(&str, &[i64])]) -> InvertedIndex {
        entries.iter().map(|(w, p)| ((*w).to_string(), p.to_vec())).collect()
    }

    #[test]
    fn test_simple_sequence() {
        assert_eq!(reconstruct("", &index(&[("the", &[0]), ("cat", &[1])])), "the cat");
    }

    #[test]
    fn test_literal_wins() {
        let idx = index(&[("ignored", &[0])]);
        assert_eq!(reconstruct("Given abstract", &idx), "Given abstract");
        assert_eq!(reconstruct("Given abstract", &InvertedIndex::new()), "Given abstract");
    }

    #[test]
    fn test_empty_index() {
        assert_eq!(reconstruct("", &InvertedIndex::new()), "");
    }

    #[test]
    fn test_gaps_are_skipped() {
        assert_eq!(reconstruct("", &index(&[("a", &[0]), ("b", &[2])])), "a b");
        assert_eq!(reconstruct("", &index(&[("late", &[7])])), "late");
    }

    #[test]
    fn test_repeated_word() {
        let idx = index(&[("the", &[0, 3]), ("cat", &[1]), ("saw", &[2]), ("dog", &[4])]);
        assert_eq!(reconstruct("", &idx), "the cat saw the dog");
    }

    #[test]
    fn test_negative_positions_ignored() {
        let idx = index(&[("keep", &[0]), ("drop", &[-1]), ("also", &[1, -5])]);
        assert_eq!(reconstruct("", &idx), "keep also");
    }

    #[test]
    fn test_only_negative_positions() {
        assert_eq!(reconstruct("", &index(&[("x", &[-1, -2])])), "");
    }

    #[test]
    fn test_collision_picks_one_word() {
        let idx = index(&[("left", &[0]), ("right", &[0])]);
        let text = reconstruct("", &idx);
        assert!(text == "left" || text == "right", "got {text}");
    }

    #[test]
    fn test_huge_position_does_not_allocate_slots() {
        let idx = index(&[("start", &[0]), ("end", &[i64::MAX])]);
        assert_eq!(reconstruct("", &idx), "start end");
    }

    #[test]
    fn test_empty_word_leaves_no_separator() {
        let idx = index(&[("a", &[0]), ("", &[1]), ("b", &[2])]);
        assert_eq!(reconstruct("", &idx), "a b");
    }

    #[test]
    fn test_decodes_from_openalex_json() {
        let idx: InvertedIndex =
            serde_json::from_str(r#"{"Despite":[0],"growing":[1],"interest":[2]}"#).unwrap();
        assert_eq!(reconstruct("", &idx), "Despite growing interest");
    }
}
