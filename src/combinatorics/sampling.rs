//! Seeded shuffling and cyclic padding of sample pools

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Seeded shuffler for reproducible permutations
///
/// Wraps `StdRng::seed_from_u64` with the Fisher-Yates shuffle from
/// `rand::seq::SliceRandom`. The same seed always yields the same sequence of
/// permutations, so a shuffler must be created fresh wherever output has to be
/// reproducible on its own.
pub struct SeededShuffler {
    rng: StdRng,
}

impl SeededShuffler {
    /// Create a deterministic shuffler
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shuffle `items` in place, advancing the generator
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Repeat `pool` cyclically and truncate to exactly `count` elements
///
/// A pool of `[a, b, c]` padded to seven gives `[a, b, c, a, b, c, a]`.
/// An empty pool yields an empty result.
pub fn cycle_to_length<T: Clone>(pool: &[T], count: usize) -> Vec<T> {
    pool.iter().cycle().take(count).cloned().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/combinatorics/sampling.rs"]
mod tests;
