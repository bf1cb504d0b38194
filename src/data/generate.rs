//! Random input arrays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive bounds for generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 5, max: 100 }
    }
}

/// Produces uniform random arrays of a fixed length.
///
/// Seeded generators give a reproducible sequence of arrays, which the
/// headless mode and the tests rely on.
#[derive(Debug)]
pub struct DataGenerator {
    len: usize,
    range: ValueRange,
    rng: StdRng,
}

impl DataGenerator {
    /// Generator seeded from the operating system.
    pub fn new(len: usize, range: ValueRange) -> Self {
        Self::with_rng(len, range, StdRng::from_entropy())
    }

    /// Generator with a fixed seed.
    pub fn seeded(len: usize, range: ValueRange, seed: u64) -> Self {
        Self::with_rng(len, range, StdRng::seed_from_u64(seed))
    }

    fn with_rng(len: usize, range: ValueRange, rng: StdRng) -> Self {
        Self { len, range, rng }
    }

    /// Number of values in each generated array.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Draw a fresh array. Each call is independent of the previous one.
    pub fn generate(&mut self) -> Vec<u32> {
        let ValueRange { min, max } = self.range;
        (0..self.len).map(|_| self.rng.gen_range(min..=max)).collect()
    }
}
