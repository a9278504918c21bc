//! Two-word solution search
//!
//! Treats every given letter as available and lists word pairs that chain
//! last letter to first letter and together cover all of them.

use crate::core::WordStore;
use crate::solver::Solver;
use crate::state::{PuzzleState, canonical_groups};

/// Result of a cheat run
pub struct CheatResult {
    /// Distinct letters searched, in alphabet order
    pub letters: String,
    pub groups: String,
    /// `"first second"` pairs in search order
    pub pairs: Vec<String>,
}

/// Find two-word chains for `letters`, optionally restricted by `groups`
#[must_use]
pub fn cheat(store: &WordStore, letters: &str, groups: &str) -> CheatResult {
    let state = PuzzleState::from_sides(&[letters]).with_groups(canonical_groups(groups));
    let pairs = Solver::new(store).cheat_pairs(&state);

    CheatResult {
        letters: state.statuses.selected_letters(),
        groups: state.groups,
        pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheat_finds_covering_pairs() {
        let store = WordStore::load(["abcdef", "fghijkl", "lab", "xyz"]);
        let result = cheat(&store, "ABCDEFGHIJKL", "");

        assert_eq!(result.letters, "abcdefghijkl");
        assert!(result.groups.is_empty());
        assert_eq!(result.pairs, ["abcdef fghijkl"]);
    }

    #[test]
    fn cheat_groups_prune_candidates() {
        let store = WordStore::load(["abcdef", "fghijkl"]);
        // f and g share a side, so the second word is unusable
        let result = cheat(&store, "abcdefghijkl", "fg");

        assert_eq!(result.groups, "fg");
        assert!(result.pairs.is_empty());
    }

    #[test]
    fn cheat_with_too_few_letters_is_empty() {
        let store = WordStore::load(["ab", "ba"]);
        assert!(cheat(&store, "ab", "").pairs.is_empty());
    }
}
