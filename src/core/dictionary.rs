//! The immutable word universe

use super::Word;
use rustc_hash::FxHashSet;

/// Sorted, de-duplicated set of valid words
///
/// Indices into [`Dictionary::words`] are stable for the lifetime of the
/// dictionary, which lets the session cache its candidate pool as indices.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<[u8; 5]>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Dictionary, Word};
    ///
    /// let words = ["eagle", "apple", "EAGLE"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words);
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.words()[0].text(), "apple");
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();

        let lookup = words.iter().map(|word| *word.chars()).collect();

        Self { words, lookup }
    }

    /// Build a dictionary from strings, skipping anything that is not a valid word
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(words.iter().filter_map(|&w| Word::new(w).ok()))
    }

    /// All words in alphabetical order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
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

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word.chars())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_dedups() {
        let dictionary = Dictionary::from_strs(&["eagle", "apple", "angle", "apple"]);
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["angle", "apple", "eagle"]);
    }

    #[test]
    fn skips_invalid_entries() {
        let dictionary = Dictionary::from_strs(&["eagle", "toolong", "abc", "e4gle"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn lookup_by_word() {
        let dictionary = Dictionary::from_strs(&["eagle", "apple", "angle"]);
        let eagle = Word::new("EAGLE").unwrap();
        let crane = Word::new("crane").unwrap();

        assert!(dictionary.contains(&eagle));
        assert!(!dictionary.contains(&crane));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::from_strs(&[]);
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.iter().count(), 0);
    }
}
