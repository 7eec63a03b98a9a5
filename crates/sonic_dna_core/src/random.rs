//! Injectable randomness for table draws.
//!
//! The composer never reaches for a global generator; every draw goes through
//! a [`RandomSource`] supplied by the caller, so tests can pin the sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..upper`, or 0 when `upper` is 0 or 1.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        rand::rng().random_range(0..upper)
    }
}

/// Reproducible draws from a seeded generator.
///
/// # Examples
///
/// ```
/// use sonic_dna_core::{RandomSource, SeededRandom};
///
/// let mut a = SeededRandom::new(7);
/// let mut b = SeededRandom::new(7);
/// assert_eq!(a.next_index(10), b.next_index(10));
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound.
///
/// # Examples
///
/// ```
/// use sonic_dna_core::{RandomSource, SequenceRandom};
///
/// let mut rng = SequenceRandom::new([2, 5]);
/// assert_eq!(rng.next_index(10), 2);
/// assert_eq!(rng.next_index(10), 5);
/// assert_eq!(rng.next_index(4), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRandom {
    /// Creates a source that replays `values` in order.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.values.is_empty() || upper == 0 {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}
