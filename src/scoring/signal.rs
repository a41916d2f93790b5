//! The per-letter result of testing a guess

use std::fmt;

/// Frequency data for one letter of a tested word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterSignal {
    pub letter: u8,
    pub position: usize,
    /// Fraction of candidates with this letter at this position (green intensity)
    pub position_frequency: f64,
    /// Fraction of candidates containing this letter at all (presence)
    pub overall_frequency: f64,
}

/// Discrete reading of a [`LetterSignal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Yellow,
    Gray,
}

impl LetterSignal {
    /// Share of this letter's occurrences that fall on this position
    ///
    /// 1.0 means every candidate containing the letter has it here; 0.0 means
    /// none do (or the letter is absent from every candidate).
    #[must_use]
    pub fn placement(&self) -> f64 {
        if self.overall_frequency > 0.0 {
            (self.position_frequency / self.overall_frequency).min(1.0)
        } else {
            0.0
        }
    }

    /// The most likely outcome if this letter were guessed here
    ///
    /// Compares the probability of a green hit, of a yellow hit
    /// (present elsewhere), and of a miss. Ties favour the stronger colour.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::scoring::{LetterSignal, Tone};
    ///
    /// let signal = LetterSignal {
    ///     letter: b'a',
    ///     position: 0,
    ///     position_frequency: 0.1,
    ///     overall_frequency: 0.9,
    /// };
    /// assert_eq!(signal.tone(), Tone::Yellow);
    /// ```
    #[must_use]
    pub fn tone(&self) -> Tone {
        let green = self.position_frequency;
        let yellow = self.overall_frequency - self.position_frequency;
        let gray = 1.0 - self.overall_frequency;

        if green >= yellow && green >= gray {
            Tone::Green
        } else if yellow >= gray {
            Tone::Yellow
        } else {
            Tone::Gray
        }
    }

    #[must_use]
    pub fn display_letter(&self) -> char {
        char::from(self.letter.to_ascii_uppercase())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        };
        f.write_str(name)
    }
}
