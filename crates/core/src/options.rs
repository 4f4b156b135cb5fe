//! Engine configuration
//!
//! `SearchOptions` follows the same builder pattern as the rest of the
//! workspace: a `Default` with the recommended settings and `with_*`
//! methods for overrides.

use serde::{Deserialize, Serialize};

/// Initial accumulator used by the ALL strategy
///
/// ALL folds with intersection. Seeding the fold with the empty set makes
/// every non-empty query return nothing, which is how the legacy engine
/// behaved. `Universe` seeds from every record position instead, so ALL
/// returns the records containing every query term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllSeed {
    /// Seed ALL with the full universe (conjunctive semantics)
    #[default]
    Universe,
    /// Seed ALL with the empty set (legacy, always-empty results)
    Empty,
}

/// Options controlling corpus loading and query evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Initial accumulator for the ALL strategy (default: `Universe`)
    pub all_seed: AllSeed,

    /// Trim surrounding whitespace from each record when loading (default: true)
    pub trim_records: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            all_seed: AllSeed::Universe,
            trim_records: true,
        }
    }
}

impl SearchOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reproducing the legacy engine, including the empty ALL seed
    pub fn legacy() -> Self {
        Self::default().with_all_seed(AllSeed::Empty)
    }

    /// Set the ALL seed
    pub fn with_all_seed(mut self, all_seed: AllSeed) -> Self {
        self.all_seed = all_seed;
        self
    }

    /// Set whether records are trimmed on load
    pub fn with_trim_records(mut self, trim: bool) -> Self {
        self.trim_records = trim;
        self
    }
}
