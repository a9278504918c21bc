//! Normalized dictionary storage
//!
//! A `WordStore` holds the dictionary as a set of lowercase words. Original
//! casing is discarded on ingestion and duplicates collapse.

use crate::solver::{Constraints, filter_words};
use rustc_hash::FxHashSet;

/// Deduplicated set of lowercase dictionary words
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: FxHashSet<String>,
}

impl WordStore {
    /// Build a store from raw words
    ///
    /// Every word is lower-cased; empty strings are skipped. No errors: an
    /// empty input yields an empty store.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::WordStore;
    ///
    /// let store = WordStore::load(["Apple", "apple", "PEAR"]);
    /// assert_eq!(store.len(), 2);
    /// assert!(store.has_word("pear"));
    /// ```
    pub fn load<I, S>(raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = raw_words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref();
                (!word.is_empty()).then(|| word.to_lowercase())
            })
            .collect();

        Self { words }
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn has_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words satisfying `constraints`, in no particular order
    #[must_use]
    pub fn filter(&self, constraints: &Constraints) -> Vec<&str> {
        filter_words(self.iter(), constraints)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::load(iter)
    }
}
