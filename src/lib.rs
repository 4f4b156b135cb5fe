//! Sift - minimal boolean-retrieval engine
//!
//! Sift loads an ordered sequence of text records, builds a term to
//! record-position inverted index, and answers multi-term queries under one
//! of three strategies: ALL, ANY or NONE.
//!
//! # Quick Start
//!
//! ```
//! use sift::{Corpus, SearchOptions, Strategy};
//!
//! let corpus = Corpus::from_records(
//!     vec!["the cat sat", "the dog ran", "cat and dog"],
//!     SearchOptions::default(),
//! );
//!
//! let hits = corpus.search("cat dog", Strategy::All).unwrap();
//! assert_eq!(hits.records(), vec!["cat and dog"]);
//!
//! let hits = corpus.search("cat", Strategy::None).unwrap();
//! assert_eq!(hits.records(), vec!["the dog ran"]);
//! ```
//!
//! # Architecture
//!
//! - `sift-core`: strategy algebra, options, error types
//! - `sift-search`: tokenizer, inverted index, evaluator, corpus session
//! - `sift-cli`: the `sift` binary (menu and one-shot modes)

// Re-export the public API from sift-search
pub use sift_search::*;
