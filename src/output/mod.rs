//! Terminal output formatting
//!
//! Colour gradients and pretty-printing of session responses.

pub mod colors;
pub mod display;
pub mod formatters;

pub use display::{banner, render_error, render_response};
