//! Command implementations

pub mod batch;
pub mod simple;

pub use batch::run_batch;
pub use simple::{run_simple, run_session};
