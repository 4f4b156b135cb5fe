//! Boolean combination strategies
//!
//! A strategy is a seed (the initial accumulator) plus a binary merge
//! operator folded left-to-right over the per-term posting sets:
//!
//! | Strategy | Seed                     | Merge                   |
//! |----------|--------------------------|-------------------------|
//! | ALL      | universe (or empty, see [`AllSeed`]) | intersection |
//! | ANY      | empty                    | union                   |
//! | NONE     | universe                 | difference (acc - post) |
//!
//! The variant set is closed, so dispatch is an exhaustive `match`.

use crate::error::Error;
use crate::options::AllSeed;
use crate::types::{universe, PostingSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How per-term posting sets are combined into a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strategy {
    /// Records containing every query term
    All,
    /// Records containing at least one query term
    Any,
    /// Records containing none of the query terms
    None,
}

impl Strategy {
    /// Every strategy, in menu order
    pub const VARIANTS: [Strategy; 3] = [Strategy::All, Strategy::Any, Strategy::None];

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Strategy::All => "ALL",
            Strategy::Any => "ANY",
            Strategy::None => "NONE",
        }
    }

    /// Initial accumulator for a corpus of `universe_size` records
    pub fn seed(self, universe_size: usize, all_seed: AllSeed) -> PostingSet {
        match (self, all_seed) {
            (Strategy::All, AllSeed::Universe) => universe(universe_size),
            (Strategy::All, AllSeed::Empty) => PostingSet::new(),
            (Strategy::Any, _) => PostingSet::new(),
            (Strategy::None, _) => universe(universe_size),
        }
    }

    /// Merge one term's postings into the accumulator
    pub fn merge_into(self, acc: &mut PostingSet, postings: &PostingSet) {
        match self {
            Strategy::All => acc.retain(|pos| postings.contains(pos)),
            Strategy::Any => acc.extend(postings.iter().copied()),
            Strategy::None => acc.retain(|pos| !postings.contains(pos)),
        }
    }

    /// Fold `postings` left-to-right into `seed`
    pub fn fold<'a, I>(self, seed: PostingSet, postings: I) -> PostingSet
    where
        I: IntoIterator<Item = &'a PostingSet>,
    {
        postings.into_iter().fold(seed, |mut acc, set| {
            self.merge_into(&mut acc, set);
            acc
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Parse a strategy name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Strategy::VARIANTS
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownStrategy(name.to_string()))
    }
}
