//! Compact sets of lowercase ASCII letters

use std::fmt;

/// Map a lowercase ASCII letter to its alphabet slot (0-25)
#[inline]
pub(crate) fn letter_slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

/// A set of letters `a`-`z`, stored as a 26-bit mask
///
/// Anything outside `a`-`z` is never a member; inserting it is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    fn bit(letter: u8) -> u32 {
        letter_slot(letter).map_or(0, |slot| 1 << slot)
    }

    /// Add a letter, returning whether it was newly inserted
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        let added = bit != 0 && self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Remove a letter, returning whether it was present
    pub fn remove(&mut self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// True if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
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

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter.to_ascii_uppercase()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove() {
        let mut set = LetterSet::new();
        assert!(set.insert(b'e'));
        assert!(!set.insert(b'e'));
        assert!(set.contains(b'e'));
        assert_eq!(set.len(), 1);

        assert!(set.remove(b'e'));
        assert!(!set.remove(b'e'));
        assert!(set.is_empty());
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut set = LetterSet::new();
        assert!(!set.insert(b'-'));
        assert!(!set.insert(b'E'));
        assert!(set.is_empty());
        assert!(!set.contains(b'-'));
    }

    #[test]
    fn superset_and_disjoint() {
        let word: LetterSet = b"eagle".iter().copied().collect();
        let required: LetterSet = b"ae".iter().copied().collect();
        let absent: LetterSet = b"xyz".iter().copied().collect();

        assert!(word.is_superset(required));
        assert!(!required.is_superset(word));
        assert!(word.is_disjoint(absent));
        assert!(word.is_superset(LetterSet::EMPTY));
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz");
        assert_eq!(set.to_string(), "ABERZ");
    }
}
