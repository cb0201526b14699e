//! Random selection
//!
//! Word and hint selection draw from a `RandomSource` so callers decide where the
//! randomness comes from: the thread RNG for normal play, a seeded RNG for
//! reproducible runs, or a fixed sequence in tests.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform choices
pub trait RandomSource {
    /// Pick an index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapter exposing any `rand` generator as a `RandomSource`
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Non-deterministic source backed by the thread-local RNG
    #[must_use]
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic source: equal seeds yield equal choices
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping each into range
///
/// Cycles back to the start once exhausted. An empty list always picks 0.
///
/// # Examples
/// ```
/// use hangman::core::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new(vec![2, 7]);
/// assert_eq!(source.pick(5), 2);
/// assert_eq!(source.pick(5), 2); // 7 wraps to 2
/// assert_eq!(source.pick(3), 2); // back to the first entry
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    picks: Vec<usize>,
    next: usize,
}

impl SequenceSource {
    #[must_use]
    pub const fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.next % self.picks.len()];
        self.next += 1;
        value % len
    }
}
