//! Main explorer interface

use super::filter::Constraints;
use super::pairs::find_pairs;
use crate::core::WordStore;
use crate::state::PuzzleState;
use std::time::Instant;

/// Most results returned for one snapshot
pub const MAX_RESULTS: usize = 1000;

/// Derives result lists from puzzle snapshots
///
/// Holds the dictionary; every query takes the current snapshot by reference
/// and recomputes from scratch.
pub struct Solver<'a> {
    store: &'a WordStore,
}

impl<'a> Solver<'a> {
    pub const fn new(store: &'a WordStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &'a WordStore {
        self.store
    }

    /// Every dictionary word matching `constraints`, unordered
    #[must_use]
    pub fn filter(&self, constraints: &Constraints) -> Vec<&'a str> {
        let start = Instant::now();
        let words = self.store.filter(constraints);
        log::debug!(
            "filtered {} words to {} in {:?}",
            self.store.len(),
            words.len(),
            start.elapsed()
        );
        words
    }

    /// Matching words for a snapshot, sorted and capped at [`MAX_RESULTS`]
    #[must_use]
    pub fn results(&self, state: &PuzzleState) -> Vec<&'a str> {
        let mut words = self.filter(&state.statuses.constraints(&state.groups));
        state.sort_order.sort(&mut words);
        words.truncate(MAX_RESULTS);
        words
    }

    /// Two-word chains covering every selected letter of a snapshot
    #[must_use]
    pub fn cheat_pairs(&self, state: &PuzzleState) -> Vec<String> {
        let candidates = self.filter(&state.statuses.constraints(&state.groups));
        find_pairs(&candidates, &state.statuses.selected_letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, LetterStatuses, SortOrder};

    fn available(letters: &str) -> LetterStatuses {
        letters.chars().fold(LetterStatuses::new(), |statuses, letter| {
            statuses.with_status(letter, LetterStatus::Available)
        })
    }

    #[test]
    fn results_are_filtered_and_sorted() {
        let store = WordStore::load(["cat", "cot", "dog", "cart"]);
        let solver = Solver::new(&store);
        let state = PuzzleState {
            statuses: available("cato"),
            groups: String::new(),
            sort_order: SortOrder::AlphabeticalAsc,
        };

        assert_eq!(solver.results(&state), ["cat", "cot"]);
    }

    #[test]
    fn default_order_is_longest_first() {
        let store = WordStore::load(["tact", "cat", "at", "act"]);
        let solver = Solver::new(&store);
        let state = PuzzleState::default().with_statuses(available("act"));

        assert_eq!(solver.results(&state), ["tact", "act", "cat", "at"]);
    }

    #[test]
    fn required_start_and_end_pin_positions() {
        let store = WordStore::load(["stare", "tears", "rates", "aster", "treas"]);
        let solver = Solver::new(&store);
        let statuses = available("ar")
            .with_status('s', LetterStatus::RequiredStart)
            .with_status('t', LetterStatus::RequiredAnywhere)
            .with_status('e', LetterStatus::RequiredEnd);
        let state = PuzzleState::default().with_statuses(statuses);

        assert_eq!(solver.results(&state), ["stare"]);
    }

    #[test]
    fn results_are_capped() {
        let words: Vec<String> = (0..1500)
            .map(|i| {
                let a = char::from(b'a' + (i % 26) as u8);
                let b = char::from(b'a' + ((i / 26) % 26) as u8);
                let c = char::from(b'a' + ((i / 676) % 26) as u8);
                format!("{a}{b}{c}")
            })
            .collect();
        let store = WordStore::load(&words);
        let solver = Solver::new(&store);
        let state = PuzzleState::default().with_statuses(available("abcdefghijklmnopqrstuvwxyz"));

        assert_eq!(solver.results(&state).len(), MAX_RESULTS);
        let constraints = state.statuses.constraints(&state.groups);
        assert_eq!(solver.filter(&constraints).len(), 1500);
    }

    #[test]
    fn cheat_pairs_use_selected_letters() {
        let store = WordStore::load(["abc", "cdefghijkl", "xyz"]);
        let solver = Solver::new(&store);
        let state = PuzzleState::default().with_statuses(available("abcdefghijkl"));

        assert_eq!(solver.cheat_pairs(&state), ["abc cdefghijkl"]);
    }

    #[test]
    fn empty_store_gives_empty_results() {
        let store = WordStore::default();
        let solver = Solver::new(&store);
        let state = PuzzleState::from_sides(&["abc", "def", "ghi", "jkl"]);

        assert!(solver.results(&state).is_empty());
        assert!(solver.cheat_pairs(&state).is_empty());
    }
}
