//! Inverted index from term to posting set
//!
//! This module provides:
//! - InvertedIndex::build over an ordered record sequence
//! - Lookups where unknown terms behave as empty posting sets
//! - Corpus statistics (record count, term count)
//!
//! # Lifecycle
//!
//! The index is built once per loaded dataset and has no mutation API
//! afterwards. It is `Send + Sync`, so an `Arc<InvertedIndex>` can serve
//! concurrent readers without locking.

use crate::tokenizer::{normalize, tokenize};
use rustc_hash::FxHashMap;
use sift_core::{universe, PostingSet};
use std::collections::BTreeSet;
use tracing::debug;

/// Shared result for lookups of unknown terms
static EMPTY_POSTINGS: PostingSet = BTreeSet::new();

// ============================================================================
// InvertedIndex
// ============================================================================

/// Term -> record positions mapping
///
/// Invariant: for every record R and every term T produced by
/// [`tokenize`] on R's text, `lookup(T)` contains R's position, and no
/// other positions.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Term -> posting set
    postings: FxHashMap<String, PostingSet>,

    /// Number of records the index was built from
    record_count: usize,
}

impl InvertedIndex {
    /// Build an index from records in position order
    ///
    /// An empty record sequence yields an empty index.
    pub fn build<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut postings: FxHashMap<String, PostingSet> = FxHashMap::default();
        let mut record_count = 0;

        for (pos, record) in records.into_iter().enumerate() {
            for term in tokenize(record.as_ref()) {
                postings.entry(term).or_default().insert(pos);
            }
            record_count = pos + 1;
        }

        debug!(
            records = record_count,
            terms = postings.len(),
            "Built inverted index"
        );

        InvertedIndex {
            postings,
            record_count,
        }
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Posting set for a term
    ///
    /// The term is normalized first. Unknown terms return an empty set.
    pub fn lookup(&self, term: &str) -> &PostingSet {
        self.postings
            .get(normalize(term).as_str())
            .unwrap_or(&EMPTY_POSTINGS)
    }

    /// Check whether a term occurs in any record
    pub fn contains_term(&self, term: &str) -> bool {
        !self.lookup(term).is_empty()
    }

    /// All indexed terms, sorted
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of records the index was built from
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Check if no records were indexed
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Every record position `0..record_count`
    pub fn universe(&self) -> PostingSet {
        universe(self.record_count)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positions: &[usize]) -> PostingSet {
        positions.iter().copied().collect()
    }

    fn sample() -> InvertedIndex {
        InvertedIndex::build(["the cat sat", "the dog ran", "cat and dog"])
    }

    #[test]
    fn test_build_empty() {
        let index = InvertedIndex::build(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.record_count(), 0);
        assert_eq!(index.term_count(), 0);
        assert!(index.universe().is_empty());
    }

    #[test]
    fn test_build_sample_postings() {
        let index = sample();

        assert_eq!(index.record_count(), 3);
        assert_eq!(index.term_count(), 6);
        assert_eq!(index.lookup("cat"), &set(&[0, 2]));
        assert_eq!(index.lookup("dog"), &set(&[1, 2]));
        assert_eq!(index.lookup("the"), &set(&[0, 1]));
        assert_eq!(index.lookup("sat"), &set(&[0]));
        assert_eq!(index.lookup("ran"), &set(&[1]));
        assert_eq!(index.lookup("and"), &set(&[2]));
    }

    #[test]
    fn test_lookup_unknown_term_is_empty() {
        let index = sample();
        assert!(index.lookup("zzz").is_empty());
        assert!(!index.contains_term("zzz"));
    }

    #[test]
    fn test_lookup_normalizes_case() {
        let index = sample();
        assert_eq!(index.lookup("CAT"), index.lookup("cat"));
        assert!(index.contains_term("Dog"));
    }

    #[test]
    fn test_lookup_empty_term() {
        let index = InvertedIndex::build(["  leading", "trailing  ", ""]);
        assert!(index.lookup("").is_empty());
        assert_eq!(index.term_count(), 2);
    }

    #[test]
    fn test_repeated_term_in_record_counts_once() {
        let index = InvertedIndex::build(["dog Dog DOG", "cat"]);
        assert_eq!(index.lookup("dog"), &set(&[0]));
        assert_eq!(index.term_count(), 2);
    }

    #[test]
    fn test_blank_records_still_occupy_positions() {
        let index = InvertedIndex::build(["alpha", "", "alpha beta"]);
        assert_eq!(index.record_count(), 3);
        assert_eq!(index.lookup("alpha"), &set(&[0, 2]));
        assert_eq!(index.universe(), set(&[0, 1, 2]));
    }

    #[test]
    fn test_terms_sorted() {
        let index = sample();
        assert_eq!(index.terms(), vec!["and", "cat", "dog", "ran", "sat", "the"]);
    }

    #[test]
    fn test_build_from_owned_strings() {
        let records = vec!["One two".to_string(), "TWO three".to_string()];
        let index = InvertedIndex::build(&records);
        assert_eq!(index.lookup("two"), &set(&[0, 1]));
    }

    #[test]
    fn test_index_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InvertedIndex>();
    }
}
