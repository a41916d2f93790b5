//! The assistant's session state and command dispatch
//!
//! A [`Session`] owns the constraint state, the hardmode flag, a cached
//! candidate pool, and the tie breaker used for clues. It borrows the
//! dictionary, so several sessions can share one word list.

mod command;
mod help;
mod response;

pub use command::Command;
pub use help::help_text;
pub use response::{PoolChange, Response};

use crate::clues::{RngTieBreaker, Suggestions, TieBreaker, suggest};
use crate::core::{ConstraintState, Dictionary, HintError, WORD_LENGTH, Word};
use crate::scoring::{LetterSignal, LetterStats};
use rayon::prelude::*;

/// One player's assistant state
///
/// The pool is kept as indices into the dictionary and recomputed whenever the
/// constraints change, so it is always exactly the set of dictionary words
/// that satisfy [`ConstraintState::matches`].
pub struct Session<'d, T: TieBreaker = RngTieBreaker> {
    dictionary: &'d Dictionary,
    constraints: ConstraintState,
    hardmode: bool,
    pool: Vec<usize>,
    tie_breaker: T,
}

impl<'d, T: TieBreaker> Session<'d, T> {
    /// Start a fresh session over `dictionary`
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::clues::FirstTie;
    /// use wordle_hints::core::Dictionary;
    /// use wordle_hints::session::Session;
    ///
    /// let dictionary = Dictionary::from_strs(&["apple", "angle", "ample", "eagle"]);
    /// let mut session = Session::new(&dictionary, FirstTie);
    ///
    /// let change = session.yellow("a----").unwrap();
    /// assert_eq!((change.before, change.after), (4, 1));
    /// assert_eq!(session.words()[0].text(), "eagle");
    /// ```
    pub fn new(dictionary: &'d Dictionary, tie_breaker: T) -> Self {
        Self {
            dictionary,
            constraints: ConstraintState::new(),
            hardmode: false,
            pool: (0..dictionary.len()).collect(),
            tie_breaker,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    #[must_use]
    pub const fn hardmode(&self) -> bool {
        self.hardmode
    }

    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// No word satisfies the constraints; only `reset` gets out of this
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// Candidate words in alphabetical order
    pub fn pool(&self) -> impl Iterator<Item = &'d Word> + '_ {
        let words = self.dictionary.words();
        self.pool.iter().map(move |&i| &words[i])
    }

    /// The candidate pool as a sorted list
    #[must_use]
    pub fn words(&self) -> Vec<&'d Word> {
        // dictionary order is alphabetical and the pool keeps it
        self.pool().collect()
    }

    /// Apply a green pattern
    ///
    /// # Errors
    /// Pattern errors; nothing changes on error.
    pub fn green(&mut self, pattern: &str) -> Result<PoolChange, HintError> {
        self.constrain(|constraints| constraints.apply_green(pattern))
    }

    /// Apply a yellow pattern
    ///
    /// # Errors
    /// Pattern errors; nothing changes on error.
    pub fn yellow(&mut self, pattern: &str) -> Result<PoolChange, HintError> {
        self.constrain(|constraints| constraints.apply_yellow(pattern))
    }

    /// Apply gray letters
    ///
    /// # Errors
    /// `InvalidCharacter` or `MissingArgument`; nothing changes on error.
    pub fn gray(&mut self, letters: &str) -> Result<PoolChange, HintError> {
        self.constrain(|constraints| constraints.apply_gray(letters))
    }

    fn constrain<F>(&mut self, apply: F) -> Result<PoolChange, HintError>
    where
        F: FnOnce(&mut ConstraintState) -> Result<(), HintError>,
    {
        let before = self.pool.len();
        apply(&mut self.constraints)?;
        self.refresh_pool();
        Ok(PoolChange {
            before,
            after: self.pool.len(),
        })
    }

    /// Re-scan the dictionary against the current constraints
    fn refresh_pool(&mut self) {
        let constraints = &self.constraints;
        self.pool = self
            .dictionary
            .words()
            .par_iter()
            .enumerate()
            .filter(|(_, word)| constraints.matches(word))
            .map(|(i, _)| i)
            .collect();
    }

    fn stats(&self) -> Result<LetterStats, HintError> {
        LetterStats::from_pool(self.pool())
    }

    /// Frequency data for each letter of `guess` against the candidate pool
    ///
    /// The guess need not be in the dictionary.
    ///
    /// # Errors
    /// - `InvalidLength` / `InvalidCharacter` if `guess` is not 5 letters
    /// - `EmptyPool` if no candidates remain
    pub fn test(&self, guess: &str) -> Result<(Word, [LetterSignal; WORD_LENGTH]), HintError> {
        let word = Word::new(guess)?;
        let signals = self.stats()?.color_score(&word);
        Ok((word, signals))
    }

    /// One suggestion per strategy
    ///
    /// The search space is the whole dictionary, or only the candidate pool in
    /// hardmode. Scores are always computed against the candidate pool, and
    /// letters already reported green, yellow or gray add no information.
    ///
    /// # Errors
    /// `EmptyPool` if no candidates remain.
    pub fn clues(&mut self) -> Result<Suggestions<'d>, HintError> {
        let stats = self.stats()?;
        let search_space: Vec<&'d Word> = if self.hardmode {
            self.pool().collect()
        } else {
            self.dictionary.iter().collect()
        };
        let known = self.constraints.required().union(self.constraints.excluded());
        suggest(&search_space, &stats, known, &mut self.tie_breaker)
    }

    /// Flip hardmode, returning the new value
    pub fn toggle_hardmode(&mut self) -> bool {
        self.hardmode = !self.hardmode;
        self.hardmode
    }

    pub fn set_hardmode(&mut self, hardmode: bool) {
        self.hardmode = hardmode;
    }

    /// Clear every constraint and turn hardmode off
    pub fn reset(&mut self) {
        self.constraints.reset();
        self.hardmode = false;
        self.pool = (0..self.dictionary.len()).collect();
    }

    /// Run one parsed command
    ///
    /// # Errors
    /// Whatever the underlying operation reports; the session is unchanged on error.
    pub fn execute(&mut self, command: &Command) -> Result<Response<'d>, HintError> {
        Ok(match command {
            Command::Green(pattern) => Response::PoolChanged(self.green(pattern)?),
            Command::Yellow(pattern) => Response::PoolChanged(self.yellow(pattern)?),
            Command::Gray(letters) => Response::PoolChanged(self.gray(letters)?),
            Command::Test(guess) => {
                let (word, signals) = self.test(guess)?;
                let in_dictionary = self.dictionary.contains(&word);
                Response::Tested {
                    word,
                    signals,
                    in_dictionary,
                }
            }
            Command::Clues => Response::Clues(Box::new(self.clues()?)),
            Command::Words => Response::Words(self.words()),
            Command::Hardmode => Response::Hardmode(self.toggle_hardmode()),
            Command::Reset => {
                self.reset();
                Response::Reset {
                    pool_size: self.pool_size(),
                }
            }
            Command::Help(topic) => Response::Help(help_text(topic.as_deref())?),
            Command::Exit => Response::Exit,
        })
    }

    /// Parse and run one line of input
    ///
    /// # Errors
    /// Parse errors or errors from [`Session::execute`].
    pub fn execute_line(&mut self, line: &str) -> Result<Response<'d>, HintError> {
        let command = Command::parse(line)?;
        self.execute(&command)
    }
}
