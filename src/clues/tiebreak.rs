//! Choosing among equally-scored words

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one of `count` equally good candidates
pub trait TieBreaker {
    /// Return an index in `0..count`
    ///
    /// Callers never pass `count == 0`.
    fn pick(&mut self, count: usize) -> usize;
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    fn pick(&mut self, count: usize) -> usize {
        (**self).pick(count)
    }
}

/// Uniform choice driven by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngTieBreaker<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngTieBreaker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngTieBreaker<StdRng> {
    /// Reproducible tie-breaks
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::clues::{RngTieBreaker, TieBreaker};
    ///
    /// let mut a = RngTieBreaker::seeded(7);
    /// let mut b = RngTieBreaker::seeded(7);
    /// assert_eq!(a.pick(10), b.pick(10));
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> TieBreaker for RngTieBreaker<R> {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.random_range(0..count)
    }
}

/// Always the first tied word (alphabetically, since the dictionary is sorted)
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstTie;

impl TieBreaker for FirstTie {
    fn pick(&mut self, _count: usize) -> usize {
        0
    }
}

/// Always the last tied word
#[derive(Debug, Clone, Copy, Default)]
pub struct LastTie;

impl TieBreaker for LastTie {
    fn pick(&mut self, count: usize) -> usize {
        count - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_picks_stay_in_range() {
        let mut tie_breaker = RngTieBreaker::seeded(42);
        for count in 1..50 {
            assert!(tie_breaker.pick(count) < count);
        }
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut tie_breaker = RngTieBreaker::seeded(3);
        assert_eq!(tie_breaker.pick(1), 0);
        assert_eq!(FirstTie.pick(1), 0);
        assert_eq!(LastTie.pick(1), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RngTieBreaker::seeded(99);
        let mut b = RngTieBreaker::seeded(99);
        let first: Vec<usize> = (0..20).map(|_| a.pick(1000)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick(1000)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn rng_eventually_picks_every_option() {
        let mut tie_breaker = RngTieBreaker::seeded(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[tie_breaker.pick(3)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn deterministic_stubs() {
        assert_eq!(FirstTie.pick(5), 0);
        assert_eq!(LastTie.pick(5), 4);
    }
}
