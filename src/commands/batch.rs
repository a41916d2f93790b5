//! Non-interactive execution of a fixed list of commands

use crate::clues::TieBreaker;
use crate::output::render_response;
use crate::session::{Response, Session};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;

/// Execute each command in order, echoing it and printing its result
///
/// Stops after `exit`.
///
/// # Errors
///
/// Fails on the first command that reports an error, or on I/O failure.
pub fn run_batch<T, W>(session: &mut Session<'_, T>, commands: &[String], mut output: W) -> Result<()>
where
    T: TieBreaker,
    W: Write,
{
    for (index, line) in commands.iter().enumerate() {
        writeln!(output, "{} {line}", ">".dimmed())?;

        let response = session
            .execute_line(line)
            .with_context(|| format!("command {} ('{line}') failed", index + 1))?;
        writeln!(output, "{}", render_response(&response))?;

        if response == Response::Exit {
            break;
        }
    }
    Ok(())
}
