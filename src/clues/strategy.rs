//! The three ranking objectives

use crate::core::{LetterSet, Word};
use crate::scoring::LetterStats;
use std::fmt;

/// Which objective a suggestion maximizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueStrategy {
    /// Learn the most about which letters are in the answer
    Information,
    /// Land as many letters as possible in their exact position
    Green,
    /// Equal-weight mix of the two
    Balanced,
}

impl ClueStrategy {
    /// Heading shown next to the suggested word
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Information => "More Information",
            Self::Green => "More Green Letters",
            Self::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for ClueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Information score in pool-count units
///
/// Sum over the word's distinct letters of the number of candidates containing
/// that letter. Letters in `known` (already confirmed present or absent) are
/// skipped, since guessing them again tells nothing new. Divide by the pool
/// size for the frequency form.
///
/// # Examples
/// ```
/// use wordle_hints::clues::information_score;
/// use wordle_hints::core::{LetterSet, Word};
/// use wordle_hints::scoring::LetterStats;
///
/// let pool = [Word::new("eagle").unwrap()];
/// let stats = LetterStats::from_pool(&pool).unwrap();
///
/// // e, a, g, l each appear in the one candidate; the second e adds nothing
/// assert_eq!(information_score(&stats, &pool[0], LetterSet::EMPTY), 4);
///
/// let known: LetterSet = b"ae".iter().copied().collect();
/// assert_eq!(information_score(&stats, &pool[0], known), 2);
/// ```
#[must_use]
pub fn information_score(stats: &LetterStats, word: &Word, known: LetterSet) -> u32 {
    word.letters()
        .iter()
        .filter(|&letter| !known.contains(letter))
        .map(|letter| stats.presence_count(letter))
        .sum()
}

/// Green score in pool-count units
///
/// Sum over positions of the number of candidates sharing the word's letter there.
#[must_use]
pub fn green_score(stats: &LetterStats, word: &Word) -> u32 {
    word.chars()
        .iter()
        .enumerate()
        .map(|(position, &letter)| stats.position_count(letter, position))
        .sum()
}
