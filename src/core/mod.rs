//! Core domain types for the Wordle assistant
//!
//! Words, letter sets, the dictionary, and the constraint state built up from
//! green/yellow/gray reports. Everything here is pure and single-threaded.

mod constraints;
mod dictionary;
mod error;
mod letters;
mod word;

pub use constraints::{CluePattern, ConstraintState, PositionConstraint, is_filler};
pub use dictionary::Dictionary;
pub use error::HintError;
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};

pub(crate) use letters::letter_slot;
