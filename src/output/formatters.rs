//! Plain-text formatting helpers

use crate::core::Word;
use crate::scoring::LetterSignal;

/// Format a fraction as a whole percentage
#[must_use]
pub fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Uppercase words laid out `per_row` to a line
#[must_use]
pub fn word_columns(words: &[&Word], per_row: usize) -> String {
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|word| word.text().to_uppercase())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per letter: letter, here/anywhere frequencies, likeliest colour
#[must_use]
pub fn signal_table(signals: &[LetterSignal]) -> String {
    signals
        .iter()
        .map(|signal| {
            format!(
                "  {}  here {:>4}  anywhere {:>4}  {}",
                signal.display_letter(),
                percent(signal.position_frequency),
                percent(signal.overall_frequency),
                signal.tone()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `"1 word"` / `"3 words"`
#[must_use]
pub fn count_words(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(1.0), "100%");
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(0.333), "33%");
    }

    #[test]
    fn columns_wrap() {
        let words: Vec<Word> = ["ample", "angle", "apple"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let refs: Vec<&Word> = words.iter().collect();

        assert_eq!(word_columns(&refs, 2), "AMPLE ANGLE\nAPPLE");
        assert_eq!(word_columns(&refs, 10), "AMPLE ANGLE APPLE");
        assert_eq!(word_columns(&[], 10), "");
    }

    #[test]
    fn table_has_a_line_per_letter() {
        let signal = LetterSignal {
            letter: b'e',
            position: 0,
            position_frequency: 1.0,
            overall_frequency: 1.0,
        };
        let table = signal_table(&[signal, signal]);
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("  E  here 100%  anywhere 100%  green"));
    }

    #[test]
    fn word_counts() {
        assert_eq!(count_words(1), "1 word");
        assert_eq!(count_words(0), "0 words");
        assert_eq!(count_words(12), "12 words");
    }
}
