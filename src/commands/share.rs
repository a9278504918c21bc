//! Shareable token commands
//!
//! `share` builds a snapshot from per-status letter lists and encodes it;
//! `decode` turns a token back into a snapshot and its results.

use crate::core::{LetterStatus, LetterStatuses, SortOrder, WordStore};
use crate::solver::{MAX_RESULTS, Solver};
use crate::state::{self, PuzzleState};
use anyhow::{Result, bail};

/// Letters for each status; anything not listed stays excluded
#[derive(Debug, Clone, Default)]
pub struct ShareConfig {
    pub available: String,
    pub anywhere: String,
    pub start: String,
    pub end: String,
    pub groups: String,
    pub sort_order: SortOrder,
}

/// Build the snapshot described by `config`
///
/// Later lists win when a letter appears in several (`end` over `start` over
/// `anywhere` over `available`).
///
/// # Errors
///
/// Returns an error if any list contains a character other than a letter.
pub fn build_state(config: &ShareConfig) -> Result<PuzzleState> {
    let lists = [
        (&config.available, LetterStatus::Available),
        (&config.anywhere, LetterStatus::RequiredAnywhere),
        (&config.start, LetterStatus::RequiredStart),
        (&config.end, LetterStatus::RequiredEnd),
    ];

    let mut statuses = LetterStatuses::new();
    for (letters, status) in lists {
        if let Some(bad) = letters.chars().find(|c| !c.is_ascii_alphabetic()) {
            bail!("'{bad}' is not a letter (in {status} letters \"{letters}\")");
        }
        statuses = letters
            .chars()
            .fold(statuses, |acc, letter| acc.with_status(letter, status));
    }

    if let Some(bad) = config
        .groups
        .chars()
        .find(|&c| c != ',' && !c.is_ascii_alphabetic())
    {
        bail!("'{bad}' is not a letter (in groups \"{}\")", config.groups);
    }

    Ok(PuzzleState {
        statuses,
        groups: state::canonical_groups(&config.groups),
        sort_order: config.sort_order,
    })
}

/// Encode `config` as a `#`-prefixed token
///
/// # Errors
///
/// Propagates [`build_state`] errors.
pub fn share(config: &ShareConfig) -> Result<String> {
    let state = build_state(config)?;
    Ok(state::to_fragment(&state))
}

/// A decoded token and the results it selects
pub struct DecodeResult {
    pub state: PuzzleState,
    /// Sorted results, capped like the explorer's list
    pub words: Vec<String>,
    pub total_matches: usize,
}

/// Decode `token` (with or without `#`) and compute its results
#[must_use]
pub fn decode_token(store: &WordStore, token: &str) -> DecodeResult {
    let state = state::decode(token);
    let solver = Solver::new(store);

    let mut words = solver.filter(&state.statuses.constraints(&state.groups));
    let total_matches = words.len();
    state.sort_order.sort(&mut words);
    words.truncate(MAX_RESULTS);

    DecodeResult {
        words: words.into_iter().map(str::to_string).collect(),
        total_matches,
        state,
    }
}
