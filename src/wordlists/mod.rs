//! Word lists
//!
//! Provides the embedded dictionary compiled into the binary, and loading of
//! alternative lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Dictionary;

/// The dictionary built from the embedded word list
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::new(loader::words_from_slice(WORDS))
}
