//! Record positions and posting sets

use std::collections::BTreeSet;

/// Zero-based position of a record in the loaded sequence
pub type RecordPos = usize;

/// Set of record positions
///
/// Membership is what matters; the ordered set keeps iteration
/// reproducible for callers that print results.
pub type PostingSet = BTreeSet<RecordPos>;

/// All record positions `0..size`
pub fn universe(size: usize) -> PostingSet {
    (0..size).collect()
}
