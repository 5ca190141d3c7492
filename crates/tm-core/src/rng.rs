//! Deterministic per-episode RNG.
//!
//! Each episode gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (episode * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive episode numbers across the seed space.  Any
//! single episode can be replayed without replaying the ones before it.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct EpisodeRng(SmallRng);

impl EpisodeRng {
    /// Seed deterministically from the run's global seed and an episode number.
    pub fn new(global_seed: u64, episode: u64) -> Self {
        let seed = global_seed ^ episode.wrapping_mul(MIXING_CONSTANT);
        EpisodeRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
