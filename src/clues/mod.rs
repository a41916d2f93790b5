//! Guess suggestions
//!
//! Three objective functions rank every word in the search space against the
//! current candidate pool:
//!
//! - **Information**: sum of presence frequencies over the word's distinct letters
//! - **Green**: sum of position frequencies over the word's letters
//! - **Balanced**: equal-weight mix of the two, each normalized by its best value
//!
//! Ties are broken through a [`TieBreaker`], so tests can make the choice exact.

mod generator;
mod strategy;
mod tiebreak;

pub use generator::{Clue, Suggestions, suggest};
pub use strategy::{ClueStrategy, green_score, information_score};
pub use tiebreak::{FirstTie, LastTie, RngTieBreaker, TieBreaker};
