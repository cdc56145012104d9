//! Property-based tests for abstract reconstruction and normalization.

use std::collections::HashMap;

use proptest::prelude::*;
use scholarweave::abstract_text::{InvertedIndex, reconstruct};
use scholarweave::identifier::normalize_identifier;
use scholarweave::models::Paper;
use scholarweave::normalize::normalize_paper;

/// A sentence of distinct positions, shuffled into an inverted index.
fn arb_sentence() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z]{1,12}", 1..60)
}

fn index_of(words: &[String]) -> InvertedIndex {
    let mut index: InvertedIndex = HashMap::new();
    for (pos, word) in words.iter().enumerate() {
        index.entry(word.clone()).or_default().push(pos as i64);
    }
    index
}

proptest! {
    /// An index built from a sentence reconstructs that sentence.
    #[test]
    fn reconstruct_inverts_index(words in arb_sentence()) {
        prop_assert_eq!(reconstruct("", &index_of(&words)), words.join(" "));
    }

    /// Spreading positions apart never adds separators.
    #[test]
    fn gaps_never_add_spaces(words in arb_sentence(), stride in 1i64..50) {
        let mut index: InvertedIndex = HashMap::new();
        for (pos, word) in words.iter().enumerate() {
            index.entry(word.clone()).or_default().push(pos as i64 * stride);
        }
        let text = reconstruct("", &index);
        prop_assert!(!text.contains("  "));
        prop_assert_eq!(text, words.join(" "));
    }

    /// A non-empty literal abstract always wins.
    #[test]
    fn literal_always_wins(literal in ".{1,200}", words in arb_sentence()) {
        prop_assert_eq!(reconstruct(&literal, &index_of(&words)), literal);
    }

    /// Arbitrary indexes, including negative and colliding positions, never panic.
    #[test]
    fn reconstruct_never_panics(
        index in proptest::collection::hash_map(".{0,8}", proptest::collection::vec(any::<i64>(), 0..8), 0..20)
    ) {
        let _ = reconstruct("", &index);
    }

    /// Identifier normalization never panics and never yields an empty id.
    #[test]
    fn identifier_never_panics(raw in ".{0,64}") {
        if let Ok(id) = normalize_identifier(&raw) {
            prop_assert!(!id.trim().is_empty());
        }
    }

    /// Normalizing twice equals normalizing once.
    #[test]
    fn normalize_is_idempotent(
        title in "\\s{0,3}[A-Za-z ]{0,40}\\s{0,3}",
        body in "\\s{0,3}[A-Za-z .]{0,200}\\s{0,3}",
        source in prop_oneof![Just("openalex".to_string()), Just("OpenAlex".to_string()), "[a-z]{0,10}"],
    ) {
        let mut once = Paper { title, r#abstract: body, source, ..Paper::default() };
        normalize_paper(&mut once).unwrap();
        let mut twice = once.clone();
        normalize_paper(&mut twice).unwrap();
        prop_assert_eq!(once, twice);
    }
}
