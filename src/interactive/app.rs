//! TUI application state and logic

use super::rendering::{error_lines, response_lines};
use crate::clues::{RngTieBreaker, TieBreaker};
use crate::core::Word;
use crate::output::colors::Rgb;
use crate::session::{Command, Response, Session};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::io;

/// Oldest transcript lines are dropped beyond this
pub const MAX_TRANSCRIPT_LINES: usize = 500;

/// Application state
pub struct App<'d, T: TieBreaker = RngTieBreaker> {
    pub session: Session<'d, T>,
    pub input_buffer: String,
    pub transcript: Vec<Line<'static>>,
    pub should_quit: bool,
}

impl<'d, T: TieBreaker> App<'d, T> {
    #[must_use]
    pub fn new(session: Session<'d, T>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            transcript: Vec::new(),
            should_quit: false,
        };
        app.push_lines(vec![
            Line::from(Span::styled(
                format!(
                    "{} words loaded. Type a command and press Enter.",
                    app.session.dictionary().len()
                ),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                "'help' lists the commands, Esc clears the input, Ctrl-C quits.",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        app
    }

    /// Execute the input line and log the outcome
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let input = input.trim();
        if input.is_empty() {
            return;
        }

        let echo = Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                input.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let lines = match self.session.execute_line(input) {
            Ok(Response::Exit) => {
                self.should_quit = true;
                return;
            }
            Ok(response) => response_lines(&response),
            Err(err) => error_lines(&err),
        };

        self.push_lines(std::iter::once(echo).chain(lines).collect());
    }

    pub fn push_lines(&mut self, lines: Vec<Line<'static>>) {
        self.transcript.extend(lines);
        if self.transcript.len() > MAX_TRANSCRIPT_LINES {
            let excess = self.transcript.len() - MAX_TRANSCRIPT_LINES;
            self.transcript.drain(..excess);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Tab => self.complete_command(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Finish a partly typed command word if only one command fits
    pub fn complete_command(&mut self) {
        let typed = self.input_buffer.trim_start().to_lowercase();
        if typed.is_empty() || typed.contains(char::is_whitespace) {
            return;
        }

        let mut fits = Command::NAMES.iter().filter(|name| name.starts_with(&typed));
        if let (Some(name), None) = (fits.next(), fits.next()) {
            self.input_buffer = format!("{name} ");
        }
    }

    /// The pool, if it has at most `limit` words
    #[must_use]
    pub fn pool_preview(&self, limit: usize) -> Option<Vec<&'d Word>> {
        (self.session.pool_size() <= limit).then(|| self.session.words())
    }
}

pub(super) const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<T: TieBreaker>(app: App<'_, T>) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter the alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, T: TieBreaker>(terminal: &mut Terminal<B>, mut app: App<'_, T>) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
