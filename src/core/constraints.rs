//! Accumulated clue state and the candidate predicate
//!
//! Green and yellow reports arrive as 5-character patterns where letters carry
//! information and filler characters hold empty positions. Gray reports are a
//! free-form run of letters. Letter presence is tracked as set membership; a
//! word with two `e`s satisfies a required `e` exactly like a word with one.

use super::{HintError, LetterSet, WORD_LENGTH, Word};

/// Characters that stand for "nothing reported here" in a green/yellow pattern
///
/// # Examples
/// ```
/// use wordle_hints::core::is_filler;
///
/// assert!(is_filler('-'));
/// assert!(is_filler('0'));
/// assert!(!is_filler('a'));
/// assert!(!is_filler(' '));
/// ```
#[must_use]
pub const fn is_filler(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | '*' | '?' | '0'..='9')
}

/// A parsed green or yellow report: one optional letter per position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CluePattern([Option<u8>; WORD_LENGTH]);

impl CluePattern {
    /// Parse a 5-character pattern such as `"-r--e"`
    ///
    /// Letters are case-insensitive.
    ///
    /// # Errors
    /// - `InvalidLength` if the pattern is not exactly 5 characters
    /// - `InvalidCharacter` for anything that is neither a letter nor a filler
    pub fn parse(pattern: &str) -> Result<Self, HintError> {
        let found = pattern.chars().count();
        if found != WORD_LENGTH {
            return Err(HintError::InvalidLength { found });
        }

        let mut slots = [None; WORD_LENGTH];
        for (position, character) in pattern.chars().enumerate() {
            if character.is_ascii_alphabetic() {
                slots[position] = Some(character.to_ascii_lowercase() as u8);
            } else if !is_filler(character) {
                return Err(HintError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }

        Ok(Self(slots))
    }

    /// `(position, letter)` for every non-filler slot
    pub fn letters(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.map(|letter| (position, letter)))
    }
}

/// What is known about a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionConstraint {
    /// Green: the letter at this position is known
    Fixed(u8),
    /// Yellow history: letters known not to be at this position
    Excluded(LetterSet),
}

impl PositionConstraint {
    /// Whether `letter` may occupy this position
    #[inline]
    #[must_use]
    pub fn allows(self, letter: u8) -> bool {
        match self {
            Self::Fixed(fixed) => fixed == letter,
            Self::Excluded(excluded) => !excluded.contains(letter),
        }
    }
}

impl Default for PositionConstraint {
    fn default() -> Self {
        Self::Excluded(LetterSet::EMPTY)
    }
}

/// Everything learned so far
///
/// Invariant: `required` and `excluded` never share a letter. Whenever a
/// letter is reported green or yellow it leaves `excluded`, and gray reports
/// never exclude a letter that is already required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    positions: [PositionConstraint; WORD_LENGTH],
    required: LetterSet,
    excluded: LetterSet,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a green report
    ///
    /// Each letter fixes its position and becomes required. Fixing a position
    /// discards any yellow exclusions recorded for it.
    ///
    /// # Errors
    /// Pattern errors from [`CluePattern::parse`]; the state is unchanged.
    pub fn apply_green(&mut self, pattern: &str) -> Result<(), HintError> {
        let pattern = CluePattern::parse(pattern)?;
        for (position, letter) in pattern.letters() {
            self.positions[position] = PositionConstraint::Fixed(letter);
            self.require(letter);
        }
        Ok(())
    }

    /// Record a yellow report
    ///
    /// Each letter becomes required and is excluded from its position, unless
    /// that position is already fixed, in which case only presence is recorded.
    ///
    /// # Errors
    /// Pattern errors from [`CluePattern::parse`]; the state is unchanged.
    pub fn apply_yellow(&mut self, pattern: &str) -> Result<(), HintError> {
        let pattern = CluePattern::parse(pattern)?;
        for (position, letter) in pattern.letters() {
            if let PositionConstraint::Excluded(excluded) = &mut self.positions[position] {
                excluded.insert(letter);
            }
            self.require(letter);
        }
        Ok(())
    }

    /// Record a gray report
    ///
    /// Whitespace is ignored. Letters already required are skipped rather than
    /// rejected, since a repeated letter can come back gray next to its own
    /// green or yellow.
    ///
    /// # Errors
    /// - `MissingArgument` if no letters are given
    /// - `InvalidCharacter` for anything that is not a letter; the state is unchanged
    pub fn apply_gray(&mut self, letters: &str) -> Result<(), HintError> {
        let mut gray = LetterSet::new();
        for (position, character) in letters.chars().enumerate() {
            if character.is_whitespace() {
                continue;
            }
            if !character.is_ascii_alphabetic() {
                return Err(HintError::InvalidCharacter {
                    character,
                    position,
                });
            }
            gray.insert(character.to_ascii_lowercase() as u8);
        }

        if gray.is_empty() {
            return Err(HintError::MissingArgument("gray"));
        }

        for letter in gray.iter().filter(|&l| !self.required.contains(l)) {
            self.excluded.insert(letter);
        }
        Ok(())
    }

    fn require(&mut self, letter: u8) {
        self.required.insert(letter);
        self.excluded.remove(letter);
    }

    /// Forget everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether `word` is consistent with every recorded clue
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{ConstraintState, Word};
    ///
    /// let mut state = ConstraintState::new();
    /// state.apply_yellow("a----").unwrap();
    ///
    /// assert!(state.matches(&Word::new("eagle").unwrap()));
    /// assert!(!state.matches(&Word::new("apple").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let letters = word.letters();
        letters.is_superset(self.required)
            && letters.is_disjoint(self.excluded)
            && self
                .positions
                .iter()
                .zip(word.chars())
                .all(|(constraint, &letter)| constraint.allows(letter))
    }

    #[must_use]
    pub const fn positions(&self) -> &[PositionConstraint; WORD_LENGTH] {
        &self.positions
    }

    /// Letters confirmed present (every green and yellow seen)
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Letters confirmed absent
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn letters(text: &str) -> LetterSet {
        text.bytes().collect()
    }

    #[test]
    fn pattern_parses_letters_and_fillers() {
        let pattern = CluePattern::parse("-R_e.").unwrap();
        let parsed: Vec<(usize, u8)> = pattern.letters().collect();
        assert_eq!(parsed, [(1, b'r'), (3, b'e')]);
    }

    #[test]
    fn pattern_rejects_bad_length() {
        assert_eq!(
            CluePattern::parse("--"),
            Err(HintError::InvalidLength { found: 2 })
        );
        assert_eq!(
            CluePattern::parse("a-----"),
            Err(HintError::InvalidLength { found: 6 })
        );
    }

    #[test]
    fn pattern_rejects_bad_character() {
        assert_eq!(
            CluePattern::parse("ab!--"),
            Err(HintError::InvalidCharacter {
                character: '!',
                position: 2
            })
        );
        assert!(CluePattern::parse("a b--").is_err());
    }

    #[test]
    fn green_fixes_position_and_requires_letter() {
        let mut state = ConstraintState::new();
        state.apply_green("-r---").unwrap();

        assert_eq!(state.positions()[1], PositionConstraint::Fixed(b'r'));
        assert!(state.required().contains(b'r'));
        assert!(state.matches(&word("crane")));
        assert!(!state.matches(&word("eagle")));
    }

    #[test]
    fn filler_only_green_changes_nothing() {
        let mut state = ConstraintState::new();
        state.apply_green("-----").unwrap();
        assert_eq!(state, ConstraintState::new());
    }

    #[test]
    fn green_supersedes_yellow_exclusions() {
        let mut state = ConstraintState::new();
        state.apply_yellow("a----").unwrap();
        state.apply_green("e----").unwrap();

        assert_eq!(state.positions()[0], PositionConstraint::Fixed(b'e'));
        assert!(state.matches(&word("eagle")));
    }

    #[test]
    fn yellow_excludes_position_and_requires_letter() {
        let mut state = ConstraintState::new();
        state.apply_yellow("a----").unwrap();

        assert_eq!(
            state.positions()[0],
            PositionConstraint::Excluded(letters("a"))
        );
        assert!(state.matches(&word("eagle")));
        assert!(!state.matches(&word("apple")));
        assert!(!state.matches(&word("crepe")));
    }

    #[test]
    fn yellow_on_fixed_position_only_confirms_presence() {
        let mut state = ConstraintState::new();
        state.apply_green("e----").unwrap();
        state.apply_yellow("e----").unwrap();

        assert_eq!(state.positions()[0], PositionConstraint::Fixed(b'e'));
        assert!(state.matches(&word("eagle")));
    }

    #[test]
    fn gray_excludes_letters() {
        let mut state = ConstraintState::new();
        state.apply_gray("xyz").unwrap();

        assert_eq!(state.excluded(), letters("xyz"));
        assert!(state.matches(&word("eagle")));
        assert!(!state.matches(&word("zebra")));
    }

    #[test]
    fn gray_ignores_required_letters() {
        let mut state = ConstraintState::new();
        state.apply_green("e----").unwrap();
        state.apply_gray("el").unwrap();

        assert!(!state.excluded().contains(b'e'));
        assert!(state.excluded().contains(b'l'));
        assert!(state.matches(&word("eerie")));
    }

    #[test]
    fn later_yellow_clears_earlier_gray() {
        let mut state = ConstraintState::new();
        state.apply_gray("e").unwrap();
        assert!(!state.matches(&word("eagle")));

        state.apply_yellow("----e").unwrap();
        assert!(state.required().is_disjoint(state.excluded()));
        assert!(!state.excluded().contains(b'e'));
        assert!(!state.matches(&word("eagle")));
        assert!(!state.matches(&word("eerie")));
        assert!(state.matches(&word("bread")));
    }

    #[test]
    fn gray_rejects_non_letters_without_mutating() {
        let mut state = ConstraintState::new();
        let err = state.apply_gray("ab3").unwrap_err();

        assert_eq!(
            err,
            HintError::InvalidCharacter {
                character: '3',
                position: 2
            }
        );
        assert_eq!(state, ConstraintState::new());
    }

    #[test]
    fn gray_requires_at_least_one_letter() {
        let mut state = ConstraintState::new();
        assert_eq!(
            state.apply_gray("  "),
            Err(HintError::MissingArgument("gray"))
        );
    }

    #[test]
    fn invalid_pattern_leaves_state_untouched() {
        let mut state = ConstraintState::new();
        state.apply_green("c----").unwrap();
        let before = state.clone();

        assert!(state.apply_yellow("ab!de").is_err());
        assert!(state.apply_green("abc").is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = ConstraintState::new();
        state.apply_green("c----").unwrap();
        state.apply_yellow("-a---").unwrap();
        state.apply_gray("xyz").unwrap();

        state.reset();
        assert_eq!(state, ConstraintState::new());
    }

    #[test]
    fn repeated_patterns_are_idempotent() {
        let mut once = ConstraintState::new();
        once.apply_yellow("-a--e").unwrap();
        once.apply_green("c----").unwrap();

        let mut twice = once.clone();
        twice.apply_yellow("-a--e").unwrap();
        twice.apply_green("c----").unwrap();

        assert_eq!(once, twice);
    }
}
