//! Puzzle state snapshots
//!
//! A [`PuzzleState`] is everything the explorer needs to reproduce a view:
//! letter statuses, the adjacency group string and the result ordering. The
//! shell holds one snapshot and swaps in a new one per user action.

mod codec;
mod groups;

pub use codec::{decode, encode, to_fragment};
pub use groups::{
    calculate_groups, canonical_groups, group_of, insertion_index, join_groups, move_letter,
    parse_groups,
};

use crate::core::{LetterStatus, LetterStatuses, SortOrder};

/// Immutable view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleState {
    pub statuses: LetterStatuses,
    /// Comma-separated adjacency groups, e.g. `"abc,def"`
    pub groups: String,
    pub sort_order: SortOrder,
}

impl PuzzleState {
    /// A four-sided puzzle: every letter of `sides` available, one group per side
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::state::PuzzleState;
    ///
    /// let state = PuzzleState::from_sides(&["cab", "def", "ghi", "jkl"]);
    /// assert_eq!(state.groups, "abc,def,ghi,jkl");
    /// assert_eq!(state.statuses.selected_letters(), "abcdefghijkl");
    /// ```
    #[must_use]
    pub fn from_sides<S: AsRef<str>>(sides: &[S]) -> Self {
        let statuses = sides
            .iter()
            .flat_map(|side| side.as_ref().chars())
            .fold(LetterStatuses::new(), |statuses, letter| {
                statuses.with_status(letter, LetterStatus::Available)
            });

        let sides: Vec<&str> = sides.iter().map(AsRef::as_ref).collect();

        Self {
            statuses,
            groups: canonical_groups(&sides.join(",")),
            sort_order: SortOrder::default(),
        }
    }

    #[must_use]
    pub fn with_statuses(&self, statuses: LetterStatuses) -> Self {
        Self {
            statuses,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_groups(&self, groups: impl Into<String>) -> Self {
        Self {
            groups: groups.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sort_order(&self, sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..self.clone()
        }
    }

    /// Group string as an ordered list of clusters
    #[must_use]
    pub fn group_list(&self) -> Vec<String> {
        parse_groups(&self.groups)
    }
}
