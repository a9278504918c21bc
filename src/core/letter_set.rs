//! Compact set of lowercase ASCII letters
//!
//! A `LetterSet` packs membership of `a`-`z` into the low 26 bits of a `u32`,
//! so union, subset and intersection checks are single bit operations.

use std::fmt;

/// A set of letters from the 26-letter alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `a`-`z`
    pub const ALL: Self = Self((1 << 26) - 1);

    /// Bit for a lowercase ASCII letter, `None` for anything else
    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter - b'a'))
        } else {
            None
        }
    }

    /// Build a set from the letters of `text`, case-insensitively
    ///
    /// Characters outside `a`-`z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("CaT!");
    /// assert!(set.contains(b'a'));
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        let mut set = Self::EMPTY;
        for byte in text.bytes() {
            set.insert(byte.to_ascii_lowercase());
        }
        set
    }

    /// Letters of a lowercase word, or `None` if it has any character outside `a`-`z`
    #[must_use]
    pub fn of_word(word: &str) -> Option<Self> {
        let mut bits = 0;
        for byte in word.bytes() {
            bits |= Self::bit(byte)?;
        }
        Some(Self(bits))
    }

    /// Add a letter, returning `true` if it was not already present
    ///
    /// Non-letters are ignored and return `false`.
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if every letter of `other` is in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabet order
    pub fn iter(self) -> impl Iterator<Item = char> {
        (b'a'..=b'z')
            .filter(move |&letter| self.contains(letter))
            .map(char::from)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
