//! Presentation ordering for filtered words
//!
//! Sorting never changes which words match, only the order they are shown in.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Order in which result words are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    AlphabeticalAsc,
    AlphabeticalDesc,
    LengthAsc,
    /// Longest words first (default)
    #[default]
    LengthDesc,
}

/// Error returned when parsing an unknown sort order name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order '{0}' (expected alphabetical-asc, alphabetical-desc, length-asc or length-desc)")]
pub struct ParseSortOrderError(pub String);

impl SortOrder {
    pub const ALL: [Self; 4] = [
        Self::AlphabeticalAsc,
        Self::AlphabeticalDesc,
        Self::LengthAsc,
        Self::LengthDesc,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AlphabeticalAsc => "alphabetical-asc",
            Self::AlphabeticalDesc => "alphabetical-desc",
            Self::LengthAsc => "length-asc",
            Self::LengthDesc => "length-desc",
        }
    }

    /// Recognise one of the four kebab-case names exactly
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.name() == name)
    }

    /// Sort `words` in place
    ///
    /// Length orders break ties alphabetically (ascending) in both directions.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::SortOrder;
    ///
    /// let mut words = vec!["cat", "at", "act"];
    /// SortOrder::LengthDesc.sort(&mut words);
    /// assert_eq!(words, ["act", "cat", "at"]);
    /// ```
    pub fn sort<S: AsRef<str>>(self, words: &mut [S]) {
        match self {
            Self::AlphabeticalAsc => words.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref())),
            Self::AlphabeticalDesc => words.sort_unstable_by(|a, b| b.as_ref().cmp(a.as_ref())),
            Self::LengthAsc => words.sort_by(|a, b| {
                let (a, b) = (a.as_ref(), b.as_ref());
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }),
            Self::LengthDesc => words.sort_by(|a, b| {
                let (a, b) = (a.as_ref(), b.as_ref());
                Reverse(a.len()).cmp(&Reverse(b.len())).then_with(|| a.cmp(b))
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::from_name(&lower).ok_or(ParseSortOrderError(lower))
    }
}
