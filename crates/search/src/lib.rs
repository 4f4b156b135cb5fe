//! Boolean retrieval for sift
//!
//! This crate provides:
//! - Whitespace tokenizer with case folding, shared by indexing and queries
//! - InvertedIndex built once from an ordered record sequence
//! - evaluate: left-fold of posting sets under a Strategy
//! - Corpus: explicit session object owning records, index and options
//!
//! # Usage
//!
//! ```
//! use sift_search::{Corpus, Strategy};
//!
//! let corpus = Corpus::from_records(
//!     vec!["the cat sat", "the dog ran", "cat and dog"],
//!     Default::default(),
//! );
//! let result = corpus.search("cat dog", Strategy::All).unwrap();
//! assert_eq!(result.positions(), vec![2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod evaluator;
pub mod index;
pub mod tokenizer;

// Re-export commonly used types
pub use corpus::{Corpus, SearchHit, SearchResult};
pub use evaluator::{evaluate, evaluate_with_seed};
pub use index::InvertedIndex;
pub use sift_core::{AllSeed, Error, PostingSet, RecordPos, Result, SearchOptions, Strategy};
pub use tokenizer::{normalize, tokenize};
