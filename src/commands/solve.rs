//! Word listing command
//!
//! Filters the dictionary with the letters and restrictions given on the
//! command line and returns the sorted matches.

use crate::core::{SortOrder, WordStore};
use crate::solver::{Constraints, MAX_RESULTS, Solver};

/// Configuration for a solve run
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Letters allowed in words
    pub letters: String,
    pub must_use: String,
    pub cannot_use: String,
    pub starts_with: String,
    pub ends_with: String,
    /// Comma-separated adjacency groups
    pub groups: String,
    pub sort_order: SortOrder,
    pub limit: usize,
}

impl SolveConfig {
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            must_use: String::new(),
            cannot_use: String::new(),
            starts_with: String::new(),
            ends_with: String::new(),
            groups: String::new(),
            sort_order: SortOrder::default(),
            limit: MAX_RESULTS,
        }
    }

    /// The filter parameters this run passes through
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints::new(self.letters.to_lowercase())
            .with_required(self.must_use.to_lowercase())
            .with_excluded(self.cannot_use.to_lowercase())
            .with_starts_with(self.starts_with.to_lowercase())
            .with_ends_with(self.ends_with.to_lowercase())
            .with_groups(self.groups.to_lowercase())
    }
}

/// Result of a solve run
pub struct SolveResult {
    pub letters: String,
    pub must_use: Option<String>,
    pub cannot_use: Option<String>,
    /// Matches after sorting and truncation
    pub words: Vec<String>,
    /// Matches before truncation
    pub total_matches: usize,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_lowercase())
}

/// List the dictionary words matching `config`
#[must_use]
pub fn solve(store: &WordStore, config: &SolveConfig) -> SolveResult {
    let solver = Solver::new(store);
    let mut words = solver.filter(&config.constraints());
    let total_matches = words.len();

    config.sort_order.sort(&mut words);
    words.truncate(config.limit);

    SolveResult {
        letters: config.letters.to_lowercase(),
        must_use: non_empty(&config.must_use),
        cannot_use: non_empty(&config.cannot_use),
        words: words.into_iter().map(str::to_string).collect(),
        total_matches,
    }
}
