//! Random number seam for random-frame playback.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Uniform integer in `low..high` (high exclusive).
    ///
    /// Implementations return `low` when the range is empty.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        (**self).uniform_int(low, high)
    }
}

/// Adapts any [`rand::Rng`] to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Seed from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic source for reproducible sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RngSource<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }
}
