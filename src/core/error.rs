//! Errors reported by session operations
//!
//! All of these are recoverable: the session is left exactly as it was and
//! the caller is expected to report the message and ask again.

use super::WordError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    /// A pattern or word that must be 5 characters long was not
    InvalidLength { found: usize },
    /// A character that is neither a letter nor a filler (positions are 0-based)
    InvalidCharacter { character: char, position: usize },
    /// A command that needs an argument was given none
    MissingArgument(&'static str),
    /// The command word (or help topic) is not recognized
    UnknownCommand(String),
    /// No dictionary word is consistent with the current constraints
    EmptyPool,
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { found } => {
                write!(f, "expected exactly 5 characters, got {found}")
            }
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "'{character}' at position {} is neither a letter nor a filler",
                position + 1
            ),
            Self::MissingArgument(command) => write!(f, "'{command}' needs an argument"),
            Self::UnknownCommand(command) => write!(f, "{command} is not a known command"),
            Self::EmptyPool => write!(
                f,
                "no words match the current clues; use 'reset' to start over"
            ),
        }
    }
}

impl std::error::Error for HintError {}

impl From<WordError> for HintError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(found) => Self::InvalidLength { found },
            WordError::InvalidCharacter {
                character,
                position,
            } => Self::InvalidCharacter {
                character,
                position,
            },
        }
    }
}
