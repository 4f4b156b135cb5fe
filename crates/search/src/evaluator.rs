//! Boolean query evaluation
//!
//! Evaluation is a left fold: seed the accumulator from the strategy, then
//! merge each query term's posting set into it in order. Unknown terms
//! contribute an empty posting set. Empty queries return the seed.

use crate::index::InvertedIndex;
use sift_core::{AllSeed, Error, PostingSet, Result, Strategy};
use tracing::{debug, warn};

/// Evaluate a query with the default (universe-seeded) ALL semantics
///
/// `universe_size` must equal the number of records the index was built
/// from; any other value is rejected with `Error::InvalidArgument`.
///
/// # Example
///
/// ```
/// use sift_search::{evaluate, InvertedIndex, Strategy};
///
/// let index = InvertedIndex::build(["the cat sat", "the dog ran", "cat and dog"]);
/// let hits = evaluate(&index, &["cat", "dog"], Strategy::Any, 3).unwrap();
/// assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub fn evaluate<S: AsRef<str>>(
    index: &InvertedIndex,
    terms: &[S],
    strategy: Strategy,
    universe_size: usize,
) -> Result<PostingSet> {
    evaluate_with_seed(index, terms, strategy, universe_size, AllSeed::default())
}

/// Evaluate a query with an explicit ALL seed
///
/// `AllSeed::Empty` reproduces the legacy engine, where ALL never matches.
pub fn evaluate_with_seed<S: AsRef<str>>(
    index: &InvertedIndex,
    terms: &[S],
    strategy: Strategy,
    universe_size: usize,
    all_seed: AllSeed,
) -> Result<PostingSet> {
    if universe_size != index.record_count() {
        warn!(
            universe_size,
            records = index.record_count(),
            "Rejected query with inconsistent universe size"
        );
        return Err(Error::universe_mismatch(index.record_count(), universe_size));
    }

    let seed = strategy.seed(universe_size, all_seed);
    let result = strategy.fold(seed, terms.iter().map(|term| index.lookup(term.as_ref())));

    debug!(
        %strategy,
        ?all_seed,
        terms = terms.len(),
        hits = result.len(),
        "Evaluated query"
    );

    Ok(result)
}
