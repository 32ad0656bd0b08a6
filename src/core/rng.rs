//! Seeded random source for encounters
//!
//! Wraps ChaCha8Rng so a run can be replayed from its seed. The generator is
//! owned by the caller and passed into whatever needs it; there is no global.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::types::{CreatureId, ID_RANGE_MAX, ID_RANGE_MIN};

/// Probability of the one-sided instant kill during an engagement
pub const INSTANT_KILL_CHANCE: f64 = 0.05;

/// Encounter random number generator
#[derive(Debug, Clone)]
pub struct EncounterRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl EncounterRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed this RNG was last seeded with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Re-seed in place; the sequence restarts from the new seed
    pub fn set_seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Uniform sample in [0, 1)
    pub fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// True when a roll lands at or below `probability`
    ///
    /// A probability of zero never succeeds, even on a roll of exactly 0.0.
    pub fn chance(&mut self, probability: f64) -> bool {
        probability > 0.0 && self.roll() <= probability
    }

    /// True roughly one time in twenty
    pub fn is_5percent_or_less(&mut self) -> bool {
        self.chance(INSTANT_KILL_CHANCE)
    }

    /// Decimal id drawn uniformly from [111, 999]
    pub fn generate_id(&mut self) -> CreatureId {
        self.generate_id_in(ID_RANGE_MIN, ID_RANGE_MAX)
    }

    /// Decimal id drawn uniformly from `[min, max]`
    ///
    /// Bounds are swapped if given in the wrong order.
    pub fn generate_id_in(&mut self, min: u32, max: u32) -> CreatureId {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        CreatureId(self.rng.gen_range(lo..=hi).to_string())
    }
}

impl Default for EncounterRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
