//! Constraint filtering
//!
//! A word matches a set of [`Constraints`] iff all of the following hold:
//! 1. it contains no excluded letter
//! 2. every letter is available or required
//! 3. every required letter occurs at least once
//! 4. it starts with `starts_with` (when non-empty)
//! 5. it ends with `ends_with` (when non-empty)
//! 6. no two adjacent letters belong to the same group
//!
//! A letter that is both excluded and required rejects every word containing
//! it, and every word lacking it, so such constraints match nothing that needs
//! that letter.

use crate::core::{LetterSet, LetterStatus, LetterStatuses};

/// Filter parameters, mirroring the `solve` command line
///
/// All strings are case-insensitive. `groups` is a comma-separated list of
/// letter clusters such as `"abc,def"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub available: String,
    pub required: String,
    pub excluded: String,
    pub starts_with: String,
    pub ends_with: String,
    pub groups: String,
}

impl Constraints {
    /// Constraints allowing exactly the letters of `available`
    #[must_use]
    pub fn new(available: impl Into<String>) -> Self {
        Self {
            available: available.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_required(mut self, letters: impl Into<String>) -> Self {
        self.required = letters.into();
        self
    }

    #[must_use]
    pub fn with_excluded(mut self, letters: impl Into<String>) -> Self {
        self.excluded = letters.into();
        self
    }

    #[must_use]
    pub fn with_starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = prefix.into();
        self
    }

    #[must_use]
    pub fn with_ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.ends_with = suffix.into();
        self
    }

    #[must_use]
    pub fn with_groups(mut self, groups: impl Into<String>) -> Self {
        self.groups = groups.into();
        self
    }

    /// Derive constraints from a status snapshot and group string
    ///
    /// Required letters are the required-anywhere, required-start and
    /// required-end letters in that order. Required-start letters form the
    /// prefix and required-end letters the suffix.
    #[must_use]
    pub fn from_statuses(statuses: &LetterStatuses, groups: &str) -> Self {
        let anywhere = statuses.letters_with(LetterStatus::RequiredAnywhere);
        let start = statuses.letters_with(LetterStatus::RequiredStart);
        let end = statuses.letters_with(LetterStatus::RequiredEnd);

        Self {
            available: statuses.letters_with(LetterStatus::Available),
            required: format!("{anywhere}{start}{end}"),
            excluded: statuses.letters_with(LetterStatus::Excluded),
            starts_with: start,
            ends_with: end,
            groups: groups.to_string(),
        }
    }

    /// Normalize into a [`Matcher`] for repeated evaluation
    #[must_use]
    pub fn compile(&self) -> Matcher {
        let available = LetterSet::from_letters(&self.available);
        let required = LetterSet::from_letters(&self.required);

        let partners = (!self.groups.is_empty()).then(|| {
            let mut partners = [LetterSet::EMPTY; 26];
            for group in self.groups.split(',').map(LetterSet::from_letters) {
                for letter in group.iter() {
                    let slot = &mut partners[(letter as u8 - b'a') as usize];
                    *slot = slot.union(group);
                }
            }
            partners
        });

        Matcher {
            allowed: available.union(required),
            required,
            excluded: LetterSet::from_letters(&self.excluded),
            starts_with: self.starts_with.to_lowercase(),
            ends_with: self.ends_with.to_lowercase(),
            partners,
        }
    }
}

/// Compiled form of [`Constraints`]
#[derive(Debug, Clone)]
pub struct Matcher {
    allowed: LetterSet,
    required: LetterSet,
    excluded: LetterSet,
    starts_with: String,
    ends_with: String,
    /// For each letter, the union of every group containing it
    partners: Option<[LetterSet; 26]>,
}

impl Matcher {
    /// Test a single lowercase word
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        // Any character outside a-z can never be allowed
        let Some(letters) = LetterSet::of_word(word) else {
            return false;
        };

        if letters.intersects(self.excluded) {
            return false;
        }
        if !self.allowed.is_superset(letters) {
            return false;
        }
        if !letters.is_superset(self.required) {
            return false;
        }
        if !word.starts_with(&self.starts_with) || !word.ends_with(&self.ends_with) {
            return false;
        }

        match &self.partners {
            Some(partners) => word
                .as_bytes()
                .windows(2)
                .all(|pair| !partners[(pair[0] - b'a') as usize].contains(pair[1])),
            None => true,
        }
    }
}

/// Keep the words matching `constraints`, preserving input order
///
/// Words are expected in lowercase, as a [`WordStore`](crate::core::WordStore)
/// provides them.
pub fn filter_words<'w, I>(words: I, constraints: &Constraints) -> Vec<&'w str>
where
    I: IntoIterator<Item = &'w str>,
{
    let matcher = constraints.compile();
    words.into_iter().filter(|word| matcher.matches(word)).collect()
}
