//! Loaded dataset and search session
//!
//! `Corpus` owns the record sequence, the index built from it and the
//! options used to query it. It replaces any process-wide dataset state:
//! each corpus is independent, and searching never mutates it.

use crate::evaluator::evaluate_with_seed;
use crate::index::InvertedIndex;
use crate::tokenizer::{normalize, tokenize};
use serde::Serialize;
use sift_core::{PostingSet, RecordPos, Result, SearchOptions, Strategy};
use std::fs;
use std::path::Path;
use tracing::info;

// ============================================================================
// SearchResult
// ============================================================================

/// A matching record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Zero-based record position
    pub position: RecordPos,
    /// Record text
    pub record: String,
}

/// Records matched by a query, in ascending position order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Strategy the query was evaluated with
    pub strategy: Strategy,
    /// Normalized query terms
    pub terms: Vec<String>,
    /// Matching records
    pub hits: Vec<SearchHit>,
}

impl SearchResult {
    /// Matching positions
    pub fn positions(&self) -> Vec<RecordPos> {
        self.hits.iter().map(|hit| hit.position).collect()
    }

    /// Matching record texts
    pub fn records(&self) -> Vec<&str> {
        self.hits.iter().map(|hit| hit.record.as_str()).collect()
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

// ============================================================================
// Corpus
// ============================================================================

/// Records plus their inverted index
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<String>,
    index: InvertedIndex,
    options: SearchOptions,
}

impl Corpus {
    /// Build a corpus from in-memory records
    ///
    /// Records are trimmed first when `options.trim_records` is set.
    pub fn from_records<I, S>(records: I, options: SearchOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records: Vec<String> = records
            .into_iter()
            .map(Into::into)
            .map(|record| {
                if options.trim_records {
                    record.trim().to_string()
                } else {
                    record
                }
            })
            .collect();
        let index = InvertedIndex::build(&records);

        Corpus {
            records,
            index,
            options,
        }
    }

    /// Load a corpus from a text file, one record per line
    ///
    /// Blank lines are kept as records so positions match line numbers.
    pub fn load(path: impl AsRef<Path>, options: SearchOptions) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let corpus = Self::from_records(text.lines(), options);

        info!(
            path = %path.display(),
            records = corpus.len(),
            terms = corpus.index.term_count(),
            "Loaded corpus"
        );

        Ok(corpus)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All records in position order
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Record text at a position
    pub fn record(&self, pos: RecordPos) -> Option<&str> {
        self.records.get(pos).map(String::as_str)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the corpus has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The inverted index over the records
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Options this corpus was built with
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Tokenize a raw query and evaluate it
    pub fn search(&self, raw_query: &str, strategy: Strategy) -> Result<SearchResult> {
        self.search_terms(&tokenize(raw_query), strategy)
    }

    /// Evaluate already-split query terms
    pub fn search_terms<S: AsRef<str>>(
        &self,
        terms: &[S],
        strategy: Strategy,
    ) -> Result<SearchResult> {
        let positions = self.matching_positions(terms, strategy)?;
        let hits = positions
            .into_iter()
            .filter_map(|position| {
                self.record(position).map(|record| SearchHit {
                    position,
                    record: record.to_string(),
                })
            })
            .collect();

        Ok(SearchResult {
            strategy,
            terms: terms
                .iter()
                .map(|term| normalize(term.as_ref()))
                .collect(),
            hits,
        })
    }

    /// Evaluate terms and return raw positions
    pub fn matching_positions<S: AsRef<str>>(
        &self,
        terms: &[S],
        strategy: Strategy,
    ) -> Result<PostingSet> {
        evaluate_with_seed(
            &self.index,
            terms,
            strategy,
            self.records.len(),
            self.options.all_seed,
        )
    }
}
