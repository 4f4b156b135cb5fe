//! Core types for sift
//!
//! This crate defines the foundational types shared by the index, the
//! evaluator and the CLI:
//! - RecordPos / PostingSet: record positions and sets of them
//! - Strategy: the closed set of boolean combination strategies
//! - SearchOptions / AllSeed: engine configuration
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod options;
pub mod strategy;
pub mod types;

pub use error::{Error, Result};
pub use options::{AllSeed, SearchOptions};
pub use strategy::Strategy;
pub use types::{universe, PostingSet, RecordPos};
