//! Session wrapper around a loaded corpus.
//!
//! Holds the corpus and the output mode for the lifetime of the process.
//! Nothing here is global; the menu and one-shot mode both borrow it.

use sift_core::{Result, Strategy};
use sift_search::{Corpus, SearchResult};

use crate::format::{format_error, format_records, format_result, OutputMode};

/// Loaded corpus plus presentation settings.
pub struct SessionState {
    corpus: Corpus,
    mode: OutputMode,
}

impl SessionState {
    /// Create a new SessionState for a loaded corpus.
    pub fn new(corpus: Corpus, mode: OutputMode) -> Self {
        Self { corpus, mode }
    }

    /// Run a raw query under a strategy.
    pub fn search(&self, query: &str, strategy: Strategy) -> Result<SearchResult> {
        self.corpus.search(query, strategy)
    }

    /// Run a query and format the outcome, errors included.
    pub fn search_and_format(&self, query: &str, strategy: Strategy) -> String {
        match self.search(query, strategy) {
            Ok(result) => format_result(&result, self.mode),
            Err(e) => format_error(&e, self.mode),
        }
    }

    /// Format every record.
    pub fn list_records(&self) -> String {
        format_records(self.corpus.records(), self.mode)
    }

    /// Output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}
