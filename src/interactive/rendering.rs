//! TUI rendering with ratatui

use super::app::{App, to_color};
use crate::clues::TieBreaker;
use crate::core::HintError;
use crate::output::colors::{Rgb, pool_color, signal_color};
use crate::output::formatters::{count_words, signal_table, word_columns};
use crate::scoring::LetterSignal;
use crate::session::{PoolChange, Response};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Pools up to this size are listed in the side panel
const POOL_PREVIEW_LIMIT: usize = 60;
const PREVIEW_WORDS_PER_ROW: usize = 4;

/// Main UI rendering function
pub fn ui<T: TieBreaker>(f: &mut Frame, app: &App<'_, T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Log and pool
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_transcript(f, app, main_chunks[0]);
    render_pool(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "WORDLE",
            Style::default()
                .fg(to_color(Rgb::GREEN))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " HINTS",
            Style::default()
                .fg(to_color(Rgb::YELLOW))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(header, area);
}

fn render_transcript<T: TieBreaker>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    // Keep the newest lines in view; wrapped lines may still push some off the top.
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = app.transcript.len().saturating_sub(visible);
    let lines: Vec<Line> = app.transcript[skip..].to_vec();

    let log = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Log ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(log, area);
}

fn render_pool<T: TieBreaker>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let pool_size = app.session.pool_size();
    let mut content = vec![Line::from(Span::styled(
        format!("{} possible", count_words(pool_size)),
        Style::default()
            .fg(to_color(pool_color(pool_size)))
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(words) = app.pool_preview(POOL_PREVIEW_LIMIT) {
        content.push(Line::default());
        content.extend(
            word_columns(&words, PREVIEW_WORDS_PER_ROW)
                .lines()
                .map(|row| Line::from(row.to_string())),
        );
    } else {
        content.push(Line::from(Span::styled(
            "'words' lists them all",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Pool ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_input<T: TieBreaker>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let input = Paragraph::new(format!("> {}", app.input_buffer))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Command ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_status<T: TieBreaker>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let hardmode = if app.session.hardmode() {
        Span::styled(
            "hardmode: on",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("hardmode: off")
    };
    f.render_widget(
        Paragraph::new(Line::from(hardmode)).alignment(Alignment::Center),
        chunks[0],
    );

    let pool_size = app.session.pool_size();
    f.render_widget(
        Paragraph::new(format!("pool: {pool_size}"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(to_color(pool_color(pool_size)))),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new("Enter: run | Tab: complete | Esc: clear | Ctrl-C: quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn signal_spans(signals: &[LetterSignal]) -> Vec<Span<'static>> {
    signals
        .iter()
        .map(|signal| {
            Span::styled(
                signal.display_letter().to_string(),
                Style::default()
                    .fg(to_color(signal_color(signal)))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn pool_change_line(change: PoolChange) -> Line<'static> {
    if change.is_exhausted() {
        return Line::from(Span::styled(
            "No words match these clues. Use 'reset' to start over.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let rest = if change.after == 1 {
        " possible word remains."
    } else {
        " possible words remain."
    };
    let mut spans = Vec::with_capacity(4);
    if change.removed() == 0 {
        spans.push(Span::styled(
            "No change: ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        change.after.to_string(),
        Style::default()
            .fg(to_color(pool_color(change.after)))
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(rest));
    spans.push(Span::styled(
        format!(" (was {})", change.before),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

/// Transcript lines for a response
#[must_use]
pub fn response_lines(response: &Response<'_>) -> Vec<Line<'static>> {
    match response {
        Response::PoolChanged(change) => vec![pool_change_line(*change)],
        Response::Tested {
            signals,
            in_dictionary,
            ..
        } => {
            let mut letters = signal_spans(signals);
            if !in_dictionary {
                letters.push(Span::styled(
                    "  (not in the word list)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            std::iter::once(Line::from(letters))
                .chain(
                    signal_table(signals)
                        .lines()
                        .map(|row| Line::from(row.to_string())),
                )
                .collect()
        }
        Response::Clues(suggestions) => suggestions
            .iter()
            .map(|clue| {
                let mut spans = vec![Span::raw(format!("{:<20}", format!("{}:", clue.strategy)))];
                spans.extend(signal_spans(&clue.signals));
                spans.push(Span::styled(
                    format!("  {:.2}", clue.score),
                    Style::default().fg(Color::DarkGray),
                ));
                Line::from(spans)
            })
            .collect(),
        Response::Words(words) => std::iter::once(Line::from(Span::styled(
            count_words(words.len()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .chain(
            word_columns(words, 8)
                .lines()
                .map(|row| Line::from(row.to_string())),
        )
        .collect(),
        Response::Hardmode(on) => vec![Line::from(format!(
            "hardmode is {}.",
            if *on { "on" } else { "off" }
        ))],
        Response::Reset { pool_size } => vec![Line::from(format!(
            "Starting over with {}.",
            count_words(*pool_size)
        ))],
        Response::Help(text) => text.lines().map(|row| Line::from(row.to_string())).collect(),
        Response::Exit => vec![Line::from("Goodbye!")],
    }
}

#[must_use]
pub fn error_lines(err: &HintError) -> Vec<Line<'static>> {
    vec![Line::from(vec![
        Span::styled(
            "error: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(err.to_string()),
    ])]
}
