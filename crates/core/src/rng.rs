//! RNG module - shuffling source for the deck builder
//!
//! Games are dealt from OS entropy by default. A fixed seed makes every deal
//! reproducible, which the tests and `--seed` rely on.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

#[derive(Debug, Clone)]
pub struct DeckRng {
    seed: Option<u64>,
    rng: StdRng,
}

impl DeckRng {
    /// Create a deterministic RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform in-place shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
