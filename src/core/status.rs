//! Per-letter puzzle status
//!
//! Every letter of the alphabet carries exactly one `LetterStatus`. The full
//! assignment is a `LetterStatuses` snapshot, which is replaced as a whole on
//! every change rather than edited in place.

use crate::solver::Constraints;
use std::fmt;
use std::str::FromStr;

/// The alphabet in the fixed order used for display and encoding
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Status of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Letter disqualifies any word containing it
    #[default]
    Excluded,
    /// Letter may appear but is not mandatory
    Available,
    /// Letter must appear and words must start with it
    RequiredStart,
    /// Letter must appear somewhere
    RequiredAnywhere,
    /// Letter must appear and words must end with it
    RequiredEnd,
}

/// Successor of each status, indexed by discriminant
const CYCLE: [LetterStatus; 5] = [
    LetterStatus::Available,
    LetterStatus::RequiredStart,
    LetterStatus::RequiredAnywhere,
    LetterStatus::RequiredEnd,
    LetterStatus::Excluded,
];

/// Error returned when parsing an unknown status name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown letter status '{0}' (expected excluded, available, required-start, required-anywhere or required-end)")]
pub struct ParseStatusError(pub String);

impl LetterStatus {
    /// All statuses in cycle order
    pub const ALL: [Self; 5] = [
        Self::Excluded,
        Self::Available,
        Self::RequiredStart,
        Self::RequiredAnywhere,
        Self::RequiredEnd,
    ];

    /// Next status in the cycle `excluded → available → required-start →
    /// required-anywhere → required-end → excluded`
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        CYCLE[self as usize]
    }

    /// Single-digit code used by the state token (`'0'`-`'4'`)
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Inverse of [`code`](Self::code)
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Self::Excluded),
            '1' => Some(Self::Available),
            '2' => Some(Self::RequiredStart),
            '3' => Some(Self::RequiredAnywhere),
            '4' => Some(Self::RequiredEnd),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excluded => "excluded",
            Self::Available => "available",
            Self::RequiredStart => "required-start",
            Self::RequiredAnywhere => "required-anywhere",
            Self::RequiredEnd => "required-end",
        }
    }

    /// True for every status except `Excluded`
    #[inline]
    #[must_use]
    pub const fn is_selected(self) -> bool {
        !matches!(self, Self::Excluded)
    }

    #[inline]
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::RequiredStart | Self::RequiredAnywhere | Self::RequiredEnd
        )
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LetterStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.name() == lower)
            .ok_or(ParseStatusError(lower))
    }
}

/// Status of every letter `a`-`z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterStatuses([LetterStatus; 26]);

impl LetterStatuses {
    /// All 26 letters excluded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_array(statuses: [LetterStatus; 26]) -> Self {
        Self(statuses)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[LetterStatus; 26] {
        &self.0
    }

    fn index(letter: char) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        lower
            .is_ascii_lowercase()
            .then(|| (lower as u8 - b'a') as usize)
    }

    /// Status of `letter` (case-insensitive); non-letters report `Excluded`
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        Self::index(letter).map_or(LetterStatus::Excluded, |i| self.0[i])
    }

    /// A new snapshot with exactly one entry replaced
    ///
    /// Non-letters leave the snapshot unchanged.
    #[must_use]
    pub fn with_status(self, letter: char, status: LetterStatus) -> Self {
        let mut next = self;
        if let Some(i) = Self::index(letter) {
            next.0[i] = status;
        }
        next
    }

    /// A new snapshot with `letter` advanced one step through the cycle
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{LetterStatus, LetterStatuses};
    ///
    /// let statuses = LetterStatuses::new().cycle('a').cycle('a');
    /// assert_eq!(statuses.status('a'), LetterStatus::RequiredStart);
    /// ```
    #[must_use]
    pub fn cycle(self, letter: char) -> Self {
        let current = self.status(letter);
        self.with_status(letter, current.next())
    }

    /// `(letter, status)` pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        ALPHABET.chars().zip(self.0.iter().copied())
    }

    /// Letters holding `status`, in alphabet order
    #[must_use]
    pub fn letters_with(&self, status: LetterStatus) -> String {
        self.iter()
            .filter(|&(_, s)| s == status)
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Every letter that is not excluded, in alphabet order
    #[must_use]
    pub fn selected_letters(&self) -> String {
        self.iter()
            .filter(|&(_, s)| s.is_selected())
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Filter parameters implied by this snapshot and `groups`
    #[must_use]
    pub fn constraints(&self, groups: &str) -> Constraints {
        Constraints::from_statuses(self, groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_statuses_are_all_excluded() {
        let statuses = LetterStatuses::new();
        assert_eq!(statuses.iter().count(), 26);
        assert!(statuses.iter().all(|(_, s)| s == LetterStatus::Excluded));
        assert_eq!(statuses.selected_letters(), "");
    }

    #[test]
    fn cycle_visits_every_status() {
        assert_eq!(LetterStatus::Excluded.next(), LetterStatus::Available);
        assert_eq!(LetterStatus::Available.next(), LetterStatus::RequiredStart);
        assert_eq!(
            LetterStatus::RequiredStart.next(),
            LetterStatus::RequiredAnywhere
        );
        assert_eq!(
            LetterStatus::RequiredAnywhere.next(),
            LetterStatus::RequiredEnd
        );
        assert_eq!(LetterStatus::RequiredEnd.next(), LetterStatus::Excluded);
    }

    #[test]
    fn cycle_replaces_one_entry() {
        let before = LetterStatuses::new().cycle('c');
        let after = before.cycle('c');

        assert_eq!(before.status('c'), LetterStatus::Available);
        assert_eq!(after.status('c'), LetterStatus::RequiredStart);
        for (letter, status) in after.iter().filter(|&(l, _)| l != 'c') {
            assert_eq!(status, before.status(letter));
        }
    }

    #[test]
    fn letter_lookup_is_case_insensitive() {
        let statuses = LetterStatuses::new().with_status('Q', LetterStatus::RequiredEnd);
        assert_eq!(statuses.status('q'), LetterStatus::RequiredEnd);
        assert_eq!(statuses.status('Q'), LetterStatus::RequiredEnd);
    }

    #[test]
    fn non_letters_are_ignored() {
        let statuses = LetterStatuses::new().with_status('3', LetterStatus::Available);
        assert_eq!(statuses, LetterStatuses::new());
        assert_eq!(statuses.status('!'), LetterStatus::Excluded);
    }

    #[test]
    fn codes_round_trip() {
        for status in LetterStatus::ALL {
            assert_eq!(LetterStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(LetterStatus::Excluded.code(), '0');
        assert_eq!(LetterStatus::RequiredEnd.code(), '4');
        assert_eq!(LetterStatus::from_code('5'), None);
    }

    #[test]
    fn names_parse() {
        for status in LetterStatus::ALL {
            assert_eq!(status.name().parse::<LetterStatus>(), Ok(status));
        }
        assert_eq!(
            "Required-Start".parse::<LetterStatus>(),
            Ok(LetterStatus::RequiredStart)
        );
        assert!("required".parse::<LetterStatus>().is_err());
    }

    #[test]
    fn letters_with_groups_by_status() {
        let statuses = LetterStatuses::new()
            .with_status('t', LetterStatus::Available)
            .with_status('a', LetterStatus::Available)
            .with_status('s', LetterStatus::RequiredStart)
            .with_status('e', LetterStatus::RequiredEnd);

        assert_eq!(statuses.letters_with(LetterStatus::Available), "at");
        assert_eq!(statuses.letters_with(LetterStatus::RequiredStart), "s");
        assert_eq!(statuses.letters_with(LetterStatus::RequiredAnywhere), "");
        assert_eq!(statuses.selected_letters(), "aest");
    }

    #[test]
    fn constraints_follow_statuses() {
        let statuses = LetterStatuses::new()
            .with_status('a', LetterStatus::Available)
            .with_status('s', LetterStatus::RequiredStart)
            .with_status('t', LetterStatus::RequiredAnywhere)
            .with_status('e', LetterStatus::RequiredEnd);

        let constraints = statuses.constraints("as,te");
        assert_eq!(constraints.available, "a");
        assert_eq!(constraints.required, "tse");
        assert_eq!(constraints.starts_with, "s");
        assert_eq!(constraints.ends_with, "e");
        assert_eq!(constraints.groups, "as,te");
    }

    #[test]
    fn required_and_selected_flags() {
        assert!(!LetterStatus::Excluded.is_selected());
        assert!(LetterStatus::Available.is_selected());
        assert!(!LetterStatus::Available.is_required());
        assert!(LetterStatus::RequiredAnywhere.is_required());
    }
}
