//! Simple interactive CLI mode
//!
//! Line-oriented prompt: read a command, print its result, repeat.

use crate::clues::TieBreaker;
use crate::output::{banner, render_error, render_response};
use crate::session::{Response, Session};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run the prompt on stdin/stdout until `exit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Invalid
/// commands are reported at the prompt and never end the loop.
pub fn run_simple<T: TieBreaker>(session: &mut Session<'_, T>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(session, stdin.lock(), stdout.lock())
}

/// Drive a session from any line source
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_session<T, R, W>(session: &mut Session<'_, T>, input: R, mut output: W) -> Result<()>
where
    T: TieBreaker,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "{}",
        banner(session.dictionary().len(), session.hardmode())
    )?;

    let mut lines = input.lines();
    loop {
        write!(output, "\n > ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match session.execute_line(&line) {
            Ok(Response::Exit) => {
                writeln!(output, "{}", render_response(&Response::Exit))?;
                break;
            }
            Ok(response) => writeln!(output, "{}", render_response(&response))?,
            Err(err) => writeln!(output, "{}", render_error(&err))?,
        }
    }

    Ok(())
}
