//! Wordle Hints - CLI
//!
//! Line prompt, full-screen TUI, or a one-shot list of commands.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_hints::{
    clues::RngTieBreaker,
    commands::{run_batch, run_simple},
    core::Dictionary,
    interactive::{App, run_tui},
    session::Session,
    wordlists::{embedded_dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Wordle assistant: track clues, list candidates, suggest guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for breaking ties between equally good clues
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Start with hardmode on (clues drawn from the remaining words only)
    #[arg(long, global = true)]
    hardmode: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-oriented prompt (default)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Execute the given commands in order and exit
    Run {
        /// Session commands, e.g. "green a----" "clues"
        #[arg(required = true)]
        commands: Vec<String>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => embedded_dictionary(),
        path => Dictionary::new(
            load_from_file(path).with_context(|| format!("failed to read word list '{path}'"))?,
        ),
    };

    if dictionary.is_empty() {
        bail!("word list '{wordlist}' contains no five-letter words");
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let tie_breaker = cli
        .seed
        .map_or_else(RngTieBreaker::from_os_rng, RngTieBreaker::seeded);

    let mut session = Session::new(&dictionary, tie_breaker);
    session.set_hardmode(cli.hardmode);

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&mut session),
        Commands::Play => run_tui(App::new(session)),
        Commands::Run { commands } => run_batch(&mut session, &commands, io::stdout().lock()),
    }
}
