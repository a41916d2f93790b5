//! Full-screen terminal interface
//!
//! The same session commands as the line prompt, with the pool kept in view.

mod app;
mod rendering;

pub use app::{App, MAX_TRANSCRIPT_LINES, run_tui};
