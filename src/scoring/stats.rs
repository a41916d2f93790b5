//! Per-letter, per-position frequency tables

use super::LetterSignal;
use crate::core::{HintError, WORD_LENGTH, Word, letter_slot};

const ALPHABET: usize = 26;

/// Frequency tables computed from one candidate pool
///
/// Counts are kept as integers so that clue scores can be compared exactly;
/// the `*_frequency` accessors divide by the pool size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStats {
    pool_size: usize,
    position_counts: [[u32; WORD_LENGTH]; ALPHABET],
    presence_counts: [u32; ALPHABET],
}

impl LetterStats {
    /// Tally a candidate pool
    ///
    /// # Errors
    /// Returns `EmptyPool` if the pool has no words.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    /// use wordle_hints::scoring::LetterStats;
    ///
    /// let pool = [Word::new("eagle").unwrap(), Word::new("angle").unwrap()];
    /// let stats = LetterStats::from_pool(&pool).unwrap();
    ///
    /// assert_eq!(stats.position_frequency(b'e', 0), 0.5);
    /// assert_eq!(stats.overall_frequency(b'e'), 1.0);
    /// ```
    pub fn from_pool<'a, I>(pool: I) -> Result<Self, HintError>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut stats = Self {
            pool_size: 0,
            position_counts: [[0; WORD_LENGTH]; ALPHABET],
            presence_counts: [0; ALPHABET],
        };

        for word in pool {
            stats.pool_size += 1;
            for (position, &letter) in word.chars().iter().enumerate() {
                if let Some(slot) = letter_slot(letter) {
                    stats.position_counts[slot][position] += 1;
                }
            }
            for letter in word.letters().iter() {
                if let Some(slot) = letter_slot(letter) {
                    stats.presence_counts[slot] += 1;
                }
            }
        }

        if stats.pool_size == 0 {
            return Err(HintError::EmptyPool);
        }
        Ok(stats)
    }

    /// Number of words the tables were built from (never zero)
    #[inline]
    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Pool words with `letter` at `position`
    #[must_use]
    pub fn position_count(&self, letter: u8, position: usize) -> u32 {
        letter_slot(letter)
            .and_then(|slot| self.position_counts[slot].get(position).copied())
            .unwrap_or(0)
    }

    /// Pool words containing `letter` anywhere
    #[must_use]
    pub fn presence_count(&self, letter: u8) -> u32 {
        letter_slot(letter).map_or(0, |slot| self.presence_counts[slot])
    }

    /// Fraction of pool words with `letter` at `position`
    #[must_use]
    pub fn position_frequency(&self, letter: u8, position: usize) -> f64 {
        f64::from(self.position_count(letter, position)) / self.pool_size as f64
    }

    /// Fraction of pool words containing `letter`
    #[must_use]
    pub fn overall_frequency(&self, letter: u8) -> f64 {
        f64::from(self.presence_count(letter)) / self.pool_size as f64
    }

    #[must_use]
    pub fn signal(&self, letter: u8, position: usize) -> LetterSignal {
        LetterSignal {
            letter,
            position,
            position_frequency: self.position_frequency(letter, position),
            overall_frequency: self.overall_frequency(letter),
        }
    }

    /// Both frequencies for every letter of `word`, in order
    #[must_use]
    pub fn color_score(&self, word: &Word) -> [LetterSignal; WORD_LENGTH] {
        std::array::from_fn(|position| self.signal(word.char_at(position), position))
    }
}
