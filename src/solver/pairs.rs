//! Two-word chain search
//!
//! Finds ordered pairs `(w1, w2)` where `w2` starts with the last letter of
//! `w1`, the two words together are at least [`MIN_PAIR_LENGTH`] letters long,
//! and every selected letter appears somewhere in `w1 + w2`.

use crate::core::LetterSet;
use rustc_hash::FxHashMap;

/// Minimum combined length of a qualifying pair
pub const MIN_PAIR_LENGTH: usize = 12;

/// Search `words` for chaining pairs covering `selected`
///
/// Output is `"w1 w2"` strings ordered as a double loop over `words` (outer
/// `w1`, inner `w2`) would produce them. A word may pair with itself. Words
/// are indexed by first letter so each `w1` only visits possible successors.
///
/// # Examples
/// ```
/// use letter_boxed::solver::find_pairs;
///
/// let pairs = find_pairs(&["abc", "cdefghijkl"], "abcdefghijkl");
/// assert_eq!(pairs, ["abc cdefghijkl"]);
/// ```
#[must_use]
pub fn find_pairs(words: &[&str], selected: &str) -> Vec<String> {
    let selected = LetterSet::from_letters(selected);

    let letters: Vec<LetterSet> = words
        .iter()
        .map(|word| LetterSet::from_letters(word))
        .collect();
    let lengths: Vec<usize> = words.iter().map(|word| word.chars().count()).collect();

    // Indices ascend within each bucket, keeping the inner loop in input order
    let mut by_first: FxHashMap<char, Vec<usize>> = FxHashMap::default();
    for (i, word) in words.iter().enumerate() {
        if let Some(first) = word.chars().next() {
            by_first.entry(first).or_default().push(i);
        }
    }

    let mut pairs = Vec::new();
    for (i, first_word) in words.iter().enumerate() {
        let Some(successors) = first_word
            .chars()
            .next_back()
            .and_then(|last| by_first.get(&last))
        else {
            continue;
        };

        for &j in successors {
            if lengths[i] + lengths[j] < MIN_PAIR_LENGTH {
                continue;
            }
            if letters[i].union(letters[j]).is_superset(selected) {
                pairs.push(format!("{first_word} {}", words[j]));
            }
        }
    }

    log::debug!(
        "pair search over {} words found {} pairs",
        words.len(),
        pairs.len()
    );
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference double loop used to check the indexed search
    fn naive_pairs(words: &[&str], selected: &str) -> Vec<String> {
        let mut pairs = Vec::new();
        for w1 in words {
            for w2 in words {
                if w1.chars().last() != w2.chars().next() {
                    continue;
                }
                if w1.len() + w2.len() < MIN_PAIR_LENGTH {
                    continue;
                }
                let combined = format!("{w1}{w2}");
                if selected.chars().all(|ch| combined.contains(ch)) {
                    pairs.push(format!("{w1} {w2}"));
                }
            }
        }
        pairs
    }

    #[test]
    fn finds_chaining_pair() {
        let pairs = find_pairs(&["abc", "cdefghijkl"], "abcdefghijkl");
        assert_eq!(pairs, ["abc cdefghijkl"]);
    }

    #[test]
    fn ignores_words_that_cannot_chain() {
        let pairs = find_pairs(&["abc", "cdefghijkl", "xyz"], "abcdefghijkl");
        assert_eq!(pairs, ["abc cdefghijkl"]);
    }

    #[test]
    fn rejects_short_combinations() {
        // 3 + 8 = 11 letters
        let pairs = find_pairs(&["abc", "cdefghij"], "abcdefghij");
        assert!(pairs.is_empty());
    }

    #[test]
    fn rejects_pairs_missing_selected_letters() {
        let pairs = find_pairs(&["abc", "cdefghijkl"], "abcdefghijklm");
        assert!(pairs.is_empty());
    }

    #[test]
    fn both_directions_are_reported_when_they_chain() {
        // Each word alone misses half the letters, so self-pairs fail
        let pairs = find_pairs(&["abcdefa", "aghijkla"], "abcdefghijkl");
        assert_eq!(pairs, ["abcdefa aghijkla", "aghijkla abcdefa"]);
    }

    #[test]
    fn word_may_pair_with_itself() {
        let pairs = find_pairs(&["abcdefghijka"], "abcdefghijk");
        assert_eq!(pairs, ["abcdefghijka abcdefghijka"]);
    }

    #[test]
    fn empty_inputs_give_no_pairs() {
        assert!(find_pairs(&[], "abc").is_empty());
        assert!(find_pairs(&["", "abc"], "").is_empty());
    }

    #[test]
    fn matches_naive_search_order() {
        let words = [
            "sample", "elephant", "trample", "end", "table", "east", "tales", "stamp",
            "pelt", "ten", "nest", "mantle",
        ];
        let selected = "abelmnpst";
        assert_eq!(find_pairs(&words, selected), naive_pairs(&words, selected));
    }
}
