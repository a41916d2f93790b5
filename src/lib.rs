//! Wordle Hints
//!
//! An assistant for Wordle players: record green, yellow and gray feedback,
//! see which dictionary words still fit, and get suggested guesses ranked by
//! letter frequencies over the remaining pool.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::clues::FirstTie;
//! use wordle_hints::core::Dictionary;
//! use wordle_hints::session::Session;
//!
//! let dictionary = Dictionary::from_strs(&["apple", "angle", "ample", "eagle"]);
//! let mut session = Session::new(&dictionary, FirstTie);
//!
//! session.green("a----").unwrap();
//! session.gray("n").unwrap();
//! assert_eq!(session.pool_size(), 2);
//!
//! let clues = session.clues().unwrap();
//! println!("try {}", clues.balanced.word);
//! ```

// Core domain types
pub mod core;

// Letter frequency statistics
pub mod scoring;

// Guess suggestions
pub mod clues;

// Session state and command dispatch
pub mod session;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
