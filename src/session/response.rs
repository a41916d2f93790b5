//! What a command produced

use crate::clues::Suggestions;
use crate::core::{WORD_LENGTH, Word};
use crate::scoring::LetterSignal;

/// Candidate pool size before and after a constraint was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolChange {
    pub before: usize,
    pub after: usize,
}

impl PoolChange {
    #[must_use]
    pub const fn removed(self) -> usize {
        self.before.saturating_sub(self.after)
    }

    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.after == 0
    }
}

/// The result of a successfully executed command
#[derive(Debug, Clone, PartialEq)]
pub enum Response<'d> {
    /// green, yellow or gray was applied
    PoolChanged(PoolChange),
    /// Colouring data for a tested word
    Tested {
        word: Word,
        signals: [LetterSignal; WORD_LENGTH],
        /// Whether the word is in the dictionary at all
        in_dictionary: bool,
    },
    Clues(Box<Suggestions<'d>>),
    /// The candidate pool, alphabetically
    Words(Vec<&'d Word>),
    /// New hardmode flag
    Hardmode(bool),
    /// State cleared; the pool is the whole dictionary again
    Reset { pool_size: usize },
    Help(&'static str),
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_change_arithmetic() {
        let change = PoolChange {
            before: 10,
            after: 4,
        };
        assert_eq!(change.removed(), 6);
        assert!(!change.is_exhausted());
        assert!(PoolChange { before: 3, after: 0 }.is_exhausted());
    }

    #[test]
    fn responses_stay_small() {
        // three clues would dwarf every other variant if stored inline
        assert!(std::mem::size_of::<Response<'_>>() <= 256);
        assert!(std::mem::size_of::<Suggestions<'_>>() > 256);
    }
}
