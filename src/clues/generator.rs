//! Arg-max selection over the search space

use super::{ClueStrategy, TieBreaker, green_score, information_score};
use crate::core::{HintError, LetterSet, WORD_LENGTH, Word};
use crate::scoring::{LetterSignal, LetterStats};
use rayon::prelude::*;

/// One suggested guess
#[derive(Debug, Clone, PartialEq)]
pub struct Clue<'a> {
    pub strategy: ClueStrategy,
    pub word: &'a Word,
    /// Objective value: frequency sums for information/green, 0.0-1.0 for balanced
    pub score: f64,
    /// Colouring data for the word against the current pool
    pub signals: [LetterSignal; WORD_LENGTH],
}

/// One suggestion per strategy
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions<'a> {
    pub information: Clue<'a>,
    pub green: Clue<'a>,
    pub balanced: Clue<'a>,
}

impl<'a> Suggestions<'a> {
    /// The three clues in display order
    pub fn iter(&self) -> impl Iterator<Item = &Clue<'a>> {
        [&self.information, &self.green, &self.balanced].into_iter()
    }
}

/// Pick the best word in `search_space` for each strategy
///
/// `stats` must describe the candidate pool, which is not necessarily the
/// search space. `known` holds letters whose presence or absence is already
/// settled; they earn no information score. The tie breaker is consulted once
/// per strategy, in the order information, green, balanced.
///
/// # Errors
/// Returns `EmptyPool` if the search space is empty.
///
/// # Examples
/// ```
/// use wordle_hints::clues::{FirstTie, suggest};
/// use wordle_hints::core::{LetterSet, Word};
/// use wordle_hints::scoring::LetterStats;
///
/// let pool = [Word::new("eagle").unwrap()];
/// let stats = LetterStats::from_pool(&pool).unwrap();
/// let space: Vec<&Word> = pool.iter().collect();
///
/// let suggestions = suggest(&space, &stats, LetterSet::EMPTY, &mut FirstTie).unwrap();
/// assert_eq!(suggestions.green.word.text(), "eagle");
/// ```
pub fn suggest<'a, T: TieBreaker + ?Sized>(
    search_space: &[&'a Word],
    stats: &LetterStats,
    known: LetterSet,
    tie_breaker: &mut T,
) -> Result<Suggestions<'a>, HintError> {
    if search_space.is_empty() {
        return Err(HintError::EmptyPool);
    }

    let scored: Vec<(u32, u32)> = search_space
        .par_iter()
        .map(|word| {
            (
                information_score(stats, word, known),
                green_score(stats, word),
            )
        })
        .collect();

    let max_information = scored.iter().map(|&(i, _)| i).max().unwrap_or(0);
    let max_green = scored.iter().map(|&(_, g)| g).max().unwrap_or(0);

    let information = pick_best(&scored, |&(i, _)| u64::from(i), tie_breaker);
    let green = pick_best(&scored, |&(_, g)| u64::from(g), tie_breaker);
    let balanced = pick_best(
        &scored,
        |&(i, g)| balanced_key(i, g, max_information, max_green),
        tie_breaker,
    );

    let pool_size = stats.pool_size() as f64;
    let clue = |strategy, index: usize, score| {
        let word = search_space[index];
        Clue {
            strategy,
            word,
            score,
            signals: stats.color_score(word),
        }
    };

    let (balanced_information, balanced_green) = scored[balanced];
    Ok(Suggestions {
        information: clue(
            ClueStrategy::Information,
            information,
            f64::from(scored[information].0) / pool_size,
        ),
        green: clue(
            ClueStrategy::Green,
            green,
            f64::from(scored[green].1) / pool_size,
        ),
        balanced: clue(
            ClueStrategy::Balanced,
            balanced,
            0.5 * normalized(balanced_information, max_information)
                + 0.5 * normalized(balanced_green, max_green),
        ),
    })
}

/// Index of a maximal entry; ties go to the tie breaker in search-space order
fn pick_best<T, K>(scored: &[(u32, u32)], key: K, tie_breaker: &mut T) -> usize
where
    T: TieBreaker + ?Sized,
    K: Fn(&(u32, u32)) -> u64,
{
    let best = scored.iter().map(&key).max().unwrap_or(0);
    let tied: Vec<usize> = scored
        .iter()
        .enumerate()
        .filter(|(_, entry)| key(entry) == best)
        .map(|(index, _)| index)
        .collect();

    let choice = tie_breaker.pick(tied.len()).min(tied.len() - 1);
    tied[choice]
}

/// `information / max_information + green / max_green`, scaled to an integer
///
/// Multiplying through by both maxima keeps the comparison exact, so words
/// with equal balanced scores really do tie.
fn balanced_key(information: u32, green: u32, max_information: u32, max_green: u32) -> u64 {
    match (max_information, max_green) {
        (0, 0) => 0,
        (0, _) => u64::from(green),
        (_, 0) => u64::from(information),
        _ => {
            u64::from(information) * u64::from(max_green)
                + u64::from(green) * u64::from(max_information)
        }
    }
}

fn normalized(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        f64::from(value) / f64::from(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clues::{FirstTie, LastTie, RngTieBreaker};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn single_candidate_wins_everything() {
        let pool = words(&["eagle"]);
        let stats = LetterStats::from_pool(&pool).unwrap();
        let space: Vec<&Word> = pool.iter().collect();

        let suggestions = suggest(&space, &stats, LetterSet::EMPTY, &mut FirstTie).unwrap();
        for clue in suggestions.iter() {
            assert_eq!(clue.word.text(), "eagle");
        }
        assert!((suggestions.green.score - 5.0).abs() < 1e-12);
        assert!((suggestions.information.score - 4.0).abs() < 1e-12);
        assert!((suggestions.balanced.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_search_space_is_an_error() {
        let pool = words(&["eagle"]);
        let stats = LetterStats::from_pool(&pool).unwrap();

        assert_eq!(
            suggest(&[], &stats, LetterSet::EMPTY, &mut FirstTie),
            Err(HintError::EmptyPool)
        );
    }

    #[test]
    fn ties_are_resolved_by_the_tie_breaker() {
        let pool = words(&["crane"]);
        let stats = LetterStats::from_pool(&pool).unwrap();
        let candidates = words(&["crane", "nacre", "react"]);
        let space: Vec<&Word> = candidates.iter().collect();

        // crane and nacre both cover all five pool letters
        let first = suggest(&space, &stats, LetterSet::EMPTY, &mut FirstTie).unwrap();
        let last = suggest(&space, &stats, LetterSet::EMPTY, &mut LastTie).unwrap();
        assert_eq!(first.information.word.text(), "crane");
        assert_eq!(last.information.word.text(), "nacre");

        // only crane puts letters in place
        assert_eq!(first.green.word.text(), "crane");
        assert_eq!(last.green.word.text(), "crane");
        assert_eq!(last.balanced.word.text(), "crane");
    }

    #[test]
    fn strategies_can_disagree() {
        let pool = words(&["apple", "ample", "angle"]);
        let stats = LetterStats::from_pool(&pool).unwrap();
        let candidates = words(&["ample", "pales", "zzzzz"]);
        let space: Vec<&Word> = candidates.iter().collect();

        let suggestions = suggest(&space, &stats, LetterSet::EMPTY, &mut FirstTie).unwrap();
        // ample: a3 m1 p2 l3 e3 = 12 ; pales: p2 a3 l3 e3 s0 = 11
        assert_eq!(suggestions.information.word.text(), "ample");
        // ample: a3 m1 p2 l3 e3 = 12 ; pales: 0
        assert_eq!(suggestions.green.word.text(), "ample");
        assert_ne!(suggestions.balanced.word.text(), "zzzzz");
    }

    #[test]
    fn information_can_pick_a_non_candidate() {
        let pool = words(&["eagle", "angle"]);
        let stats = LetterStats::from_pool(&pool).unwrap();
        let candidates = words(&["eagle", "angle", "glean"]);
        let space: Vec<&Word> = candidates.iter().collect();

        let suggestions = suggest(&space, &stats, LetterSet::EMPTY, &mut FirstTie).unwrap();
        // angle and glean cover e, a, g, l, n (9); eagle misses n (8)
        assert_eq!(suggestions.information.word.text(), "angle");
        let last = suggest(&space, &stats, LetterSet::EMPTY, &mut LastTie).unwrap();
        assert_eq!(last.information.word.text(), "glean");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let pool = words(&["crane"]);
        let stats = LetterStats::from_pool(&pool).unwrap();
        let candidates = words(&["caner", "crane", "nacre", "rance"]);
        let space: Vec<&Word> = candidates.iter().collect();

        let a = suggest(&space, &stats, LetterSet::EMPTY, &mut RngTieBreaker::seeded(5)).unwrap();
        let b = suggest(&space, &stats, LetterSet::EMPTY, &mut RngTieBreaker::seeded(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn balanced_key_handles_zero_maxima() {
        assert_eq!(balanced_key(3, 0, 5, 0), 3);
        assert_eq!(balanced_key(0, 4, 0, 5), 4);
        assert_eq!(balanced_key(0, 0, 0, 0), 0);
        assert_eq!(balanced_key(2, 3, 4, 6), 2 * 6 + 3 * 4);
    }

    #[test]
    fn signals_describe_the_suggested_word() {
        let pool = words(&["eagle", "angle"]);
        let stats = LetterStats::from_pool(&pool).unwrap();
        let space: Vec<&Word> = pool.iter().collect();

        let suggestions = suggest(&space, &stats, LetterSet::EMPTY, &mut FirstTie).unwrap();
        let clue = &suggestions.green;
        let letters: Vec<u8> = clue.signals.iter().map(|s| s.letter).collect();
        assert_eq!(letters.as_slice(), clue.word.chars());
    }
}
