//! Adjacency group editing
//!
//! Groups model the sides of the puzzle box: letters on the same side may not
//! be adjacent in a word. Groups are kept as an ordered list of letter
//! clusters, each sorted alphabetically, with no empty clusters and no letter
//! in more than one cluster.

use crate::core::LetterStatuses;
use rustc_hash::FxHashSet;

/// Split a comma-separated group string, dropping empty clusters
///
/// # Examples
/// ```
/// use letter_boxed::state::parse_groups;
///
/// assert_eq!(parse_groups("ab,,c"), ["ab", "c"]);
/// assert!(parse_groups("").is_empty());
/// ```
#[must_use]
pub fn parse_groups(groups: &str) -> Vec<String> {
    groups
        .split(',')
        .filter(|group| !group.is_empty())
        .map(str::to_string)
        .collect()
}

#[must_use]
pub fn join_groups<S: AsRef<str>>(groups: &[S]) -> String {
    groups
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Lowercase, sort and dedup each cluster of a group string
///
/// A letter keeps its first cluster and is dropped from later ones; clusters
/// left empty are dropped.
///
/// # Examples
/// ```
/// use letter_boxed::state::canonical_groups;
///
/// assert_eq!(canonical_groups("CBA,,fdd"), "abc,df");
/// assert_eq!(canonical_groups("ab,bc,ba"), "ab,c");
/// ```
#[must_use]
pub fn canonical_groups(groups: &str) -> String {
    let mut seen = FxHashSet::default();
    let clusters: Vec<String> = parse_groups(&groups.to_lowercase())
        .iter()
        .filter_map(|group| {
            let mut letters: Vec<char> = group.chars().filter(|&c| seen.insert(c)).collect();
            letters.sort_unstable();
            (!letters.is_empty()).then(|| letters.into_iter().collect())
        })
        .collect();
    join_groups(&clusters)
}

/// Index of the group holding `letter`
#[must_use]
pub fn group_of<S: AsRef<str>>(groups: &[S], letter: char) -> Option<usize> {
    groups
        .iter()
        .position(|group| group.as_ref().contains(letter))
}

fn sort_letters(group: &str) -> String {
    let mut letters: Vec<char> = group.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Move `letter` out of `groups[from]` and into `groups[to]`
///
/// A `to` of `None` (dropped outside every group) appends a new singleton
/// group. When the source group empties it is removed; if it sat before the
/// target, the target index shifts down by one. A target past the end also
/// appends a new group. Every returned group is sorted.
///
/// An out-of-range `from`, or a `letter` missing from `groups[from]`, leaves
/// the groups as they were (sorted).
///
/// # Examples
/// ```
/// use letter_boxed::state::move_letter;
///
/// assert_eq!(move_letter(&["a", "b", "c"], 'a', 0, Some(1)), ["ab", "c"]);
/// assert_eq!(move_letter(&["ab", "c"], 'a', 0, Some(1)), ["b", "ac"]);
/// assert_eq!(move_letter(&["a", "b", "c"], 'a', 0, None), ["b", "c", "a"]);
/// ```
#[must_use]
pub fn move_letter<S: AsRef<str>>(
    groups: &[S],
    letter: char,
    from: usize,
    to: Option<usize>,
) -> Vec<String> {
    let mut updated: Vec<String> = groups.iter().map(|g| g.as_ref().to_string()).collect();

    let Some(position) = updated.get(from).and_then(|group| group.find(letter)) else {
        log::warn!("ignoring move of '{letter}' from group {from}: letter not in that group");
        return updated.iter().map(|group| sort_letters(group)).collect();
    };

    updated[from].remove(position);
    let removed = updated[from].is_empty();
    if removed {
        updated.remove(from);
    }

    match to {
        None => updated.push(letter.to_string()),
        Some(to) => {
            let target = if removed && from < to { to - 1 } else { to };
            match updated.get_mut(target) {
                Some(group) => group.push(letter),
                None => updated.push(letter.to_string()),
            }
        }
    }

    updated.iter().map(|group| sort_letters(group)).collect()
}

/// Position at which `letter` keeps `group` sorted
///
/// Returns the index of the first letter greater than `letter`, or the group
/// length if there is none.
#[must_use]
pub fn insertion_index(group: &str, letter: char) -> usize {
    group
        .chars()
        .position(|existing| letter < existing)
        .unwrap_or_else(|| group.chars().count())
}

/// Reconcile a group string with the currently selected letters
///
/// With no groups, every selected letter becomes its own group. Otherwise
/// unselected letters are stripped, emptied groups dropped, and any selected
/// letter not yet grouped is appended as a singleton, in alphabet order.
#[must_use]
pub fn calculate_groups(statuses: &LetterStatuses, groups: &str) -> String {
    let selected = statuses.selected_letters();

    if groups.is_empty() {
        let singletons: Vec<String> = selected.chars().map(String::from).collect();
        return join_groups(&singletons);
    }

    let mut kept: Vec<String> = parse_groups(groups)
        .into_iter()
        .map(|group| group.chars().filter(|&ch| selected.contains(ch)).collect())
        .filter(|group: &String| !group.is_empty())
        .collect();

    let grouped: FxHashSet<char> = kept.iter().flat_map(|group| group.chars()).collect();
    kept.extend(
        selected
            .chars()
            .filter(|ch| !grouped.contains(ch))
            .map(String::from),
    );

    join_groups(&kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use proptest::prelude::*;

    #[test]
    fn moves_letter_into_next_group() {
        assert_eq!(move_letter(&["a", "b", "c"], 'a', 0, Some(1)), ["ab", "c"]);
    }

    #[test]
    fn removes_emptied_source_group() {
        assert_eq!(move_letter(&["ab", "c"], 'a', 0, Some(1)), ["b", "ac"]);
        assert_eq!(move_letter(&["a", "bc"], 'a', 0, Some(1)), ["abc"]);
    }

    #[test]
    fn drop_outside_creates_group() {
        assert_eq!(
            move_letter(&["a", "b", "c"], 'a', 0, None),
            ["b", "c", "a"]
        );
    }

    #[test]
    fn target_past_end_appends() {
        assert_eq!(move_letter(&["ab", "c"], 'b', 0, Some(9)), ["a", "c", "b"]);
    }

    #[test]
    fn moving_backwards_needs_no_shift() {
        assert_eq!(move_letter(&["a", "b", "c"], 'c', 2, Some(0)), ["ac", "b"]);
    }

    #[test]
    fn moving_into_own_group_is_stable() {
        assert_eq!(move_letter(&["ab", "c"], 'a', 0, Some(0)), ["ab", "c"]);
    }

    #[test]
    fn invalid_source_leaves_groups_unchanged() {
        assert_eq!(move_letter(&["ba", "c"], 'a', 5, Some(0)), ["ab", "c"]);
        assert_eq!(move_letter(&["ab", "c"], 'z', 0, Some(1)), ["ab", "c"]);
    }

    #[test]
    fn every_group_is_resorted() {
        assert_eq!(
            move_letter(&["cba", "fed", "g"], 'g', 2, Some(0)),
            ["abcg", "def"]
        );
    }

    #[test]
    fn insertion_index_keeps_order() {
        assert_eq!(insertion_index("bdf", 'a'), 0);
        assert_eq!(insertion_index("bdf", 'c'), 1);
        assert_eq!(insertion_index("bdf", 'e'), 2);
        assert_eq!(insertion_index("bdf", 'z'), 3);
        assert_eq!(insertion_index("", 'm'), 0);
        // Equal letters insert after the existing one
        assert_eq!(insertion_index("bdf", 'd'), 2);
    }

    #[test]
    fn parse_and_join() {
        assert_eq!(parse_groups("abc,def"), ["abc", "def"]);
        assert_eq!(parse_groups(",a,"), ["a"]);
        assert_eq!(join_groups(&["ab", "c"]), "ab,c");
        assert_eq!(join_groups::<&str>(&[]), "");
        assert_eq!(group_of(&["ab", "c"], 'c'), Some(1));
        assert_eq!(group_of(&["ab", "c"], 'z'), None);
    }

    #[test]
    fn canonical_groups_sorts_clusters() {
        assert_eq!(canonical_groups("ba,C"), "ab,c");
        assert_eq!(canonical_groups(",,"), "");
        assert_eq!(canonical_groups("zz,y"), "z,y");
    }

    #[test]
    fn canonical_groups_keeps_each_letter_once() {
        assert_eq!(canonical_groups("ab,bc"), "ab,c");
        assert_eq!(canonical_groups("ab,ba"), "ab");
        assert_eq!(canonical_groups("a,A,b"), "a,b");

        let groups = parse_groups(&canonical_groups("ab,bc"));
        let moved = move_letter(&groups, 'b', 0, None);
        assert_eq!(moved, ["a", "c", "b"]);
    }

    #[test]
    fn calculate_groups_from_scratch() {
        let statuses = LetterStatuses::new()
            .with_status('a', LetterStatus::Available)
            .with_status('b', LetterStatus::RequiredAnywhere);
        assert_eq!(calculate_groups(&statuses, ""), "a,b");
    }

    #[test]
    fn calculate_groups_prunes_and_appends() {
        let statuses = LetterStatuses::new()
            .with_status('a', LetterStatus::Available)
            .with_status('b', LetterStatus::RequiredAnywhere)
            .with_status('c', LetterStatus::Available);
        assert_eq!(calculate_groups(&statuses, "ab,cd"), "ab,c");

        let statuses = statuses.with_status('e', LetterStatus::RequiredEnd);
        assert_eq!(calculate_groups(&statuses, "d,ab"), "ab,c,e");
    }

    #[test]
    fn calculate_groups_with_nothing_selected() {
        assert_eq!(calculate_groups(&LetterStatuses::new(), "ab,c"), "");
        assert_eq!(calculate_groups(&LetterStatuses::new(), ""), "");
    }

    fn groups_strategy() -> impl Strategy<Value = Vec<String>> {
        // Distinct letters dealt into 1..=6 non-empty groups
        (prop::sample::subsequence(('a'..='z').collect::<Vec<_>>(), 1..=12), 1usize..=6)
            .prop_flat_map(|(letters, count)| {
                let count = count.min(letters.len());
                let len = letters.len();
                (
                    Just(letters),
                    prop::collection::vec(0..count, len),
                    Just(count),
                )
            })
            .prop_map(|(letters, slots, count)| {
                let mut groups = vec![String::new(); count];
                for (letter, slot) in letters.into_iter().zip(slots) {
                    groups[slot].push(letter);
                }
                groups.into_iter().filter(|g| !g.is_empty()).collect()
            })
    }

    proptest! {
        #[test]
        fn moves_conserve_letters(
            groups in groups_strategy(),
            pick in any::<prop::sample::Index>(),
            to in prop::option::of(0usize..8),
        ) {
            let from = pick.index(groups.len());
            let letter = groups[from].chars().next().unwrap();

            let before: usize = groups.iter().map(String::len).sum();
            let moved = move_letter(&groups, letter, from, to);
            let after: usize = moved.iter().map(String::len).sum();
            prop_assert_eq!(before, after);

            let mut seen = FxHashSet::default();
            for ch in moved.iter().flat_map(|g| g.chars()) {
                prop_assert!(seen.insert(ch), "letter {} appears twice", ch);
            }
            prop_assert!(moved.iter().all(|g| !g.is_empty()));
            for group in &moved {
                prop_assert_eq!(group, &sort_letters(group));
            }
        }
    }
}
