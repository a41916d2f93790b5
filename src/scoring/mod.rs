//! Letter-frequency statistics over the candidate pool
//!
//! Both the `test` command and clue generation read the same two tables:
//! how often a letter sits at a given position, and how often it appears at all.

mod signal;
mod stats;

pub use signal::{LetterSignal, Tone};
pub use stats::LetterStats;
