//! Rendering of session responses for the line-oriented interface

use super::colors::{Rgb, pool_color, signal_color};
use super::formatters::{count_words, signal_table, word_columns};
use crate::core::HintError;
use crate::scoring::LetterSignal;
use crate::session::{PoolChange, Response};
use colored::{ColoredString, Colorize};

const WORDS_PER_ROW: usize = 10;

fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.r, color.g, color.b)
}

/// The guess with each letter coloured by its frequency signal
#[must_use]
pub fn colorize_signals(signals: &[LetterSignal]) -> String {
    signals
        .iter()
        .map(|signal| {
            paint(&signal.display_letter().to_string(), signal_color(signal))
                .bold()
                .to_string()
        })
        .collect()
}

fn render_pool_change(change: PoolChange) -> String {
    if change.is_exhausted() {
        return "No words match these clues. Use 'reset' to start over."
            .red()
            .bold()
            .to_string();
    }

    let count = paint(&change.after.to_string(), pool_color(change.after)).bold();
    let rest = if change.after == 1 {
        "possible word remains."
    } else {
        "possible words remain."
    };
    if change.removed() == 0 {
        format!("{} {count} {rest}", "No change:".dimmed())
    } else {
        format!("{count} {rest}")
    }
}

/// Render a response for printing
#[must_use]
pub fn render_response(response: &Response<'_>) -> String {
    match response {
        Response::PoolChanged(change) => render_pool_change(*change),
        Response::Tested {
            signals,
            in_dictionary,
            ..
        } => {
            let note = if *in_dictionary {
                String::new()
            } else {
                format!("  {}", "(not in the word list)".dimmed())
            };
            format!(
                "{}{note}\n{}",
                colorize_signals(signals),
                signal_table(signals)
            )
        }
        Response::Clues(suggestions) => suggestions
            .iter()
            .map(|clue| {
                format!(
                    "{:<20}{}",
                    format!("{}:", clue.strategy),
                    colorize_signals(&clue.signals)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Response::Words(words) => format!(
            "{}\n{}",
            count_words(words.len()).bright_cyan().bold(),
            word_columns(words, WORDS_PER_ROW)
        ),
        Response::Hardmode(true) => format!("hardmode is {}.", "on".bright_yellow().bold()),
        Response::Hardmode(false) => format!("hardmode is {}.", "off".dimmed()),
        Response::Reset { pool_size } => format!(
            "Starting over with {}.",
            paint(&count_words(*pool_size), Rgb::LIGHT).bold()
        ),
        Response::Help(text) => (*text).to_string(),
        Response::Exit => "Goodbye!".to_string(),
    }
}

/// Render a recoverable error
#[must_use]
pub fn render_error(err: &HintError) -> String {
    format!("{} {err}", "error:".red().bold())
}

/// Greeting shown when a session starts
#[must_use]
pub fn banner(dictionary_size: usize, hardmode: bool) -> String {
    let title = format!(
        "{}{}",
        paint("Wordle", Rgb::GREEN).bold(),
        paint(" Hints", Rgb::YELLOW).bold()
    );
    let mode = if hardmode { " (hardmode on)" } else { "" };
    format!(
        "\n{title} at your service: {} loaded{mode}.\nEnter 'help' for instructions, 'exit' to quit.",
        count_words(dictionary_size)
    )
}
