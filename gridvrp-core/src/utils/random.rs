#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::RwLock;

/// A base value from which per stream seeds are derived in deterministic mode.
const DETERMINISTIC_BASE_SEED: u64 = 301;

/// Identifies an independent pseudo random stream used by a generator component.
/// Separate streams keep drawn values decorrelated from each other.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RandomStream {
    /// Node coordinate synthesis.
    Geometry,
    /// Per node demand synthesis.
    Demand,
    /// Order time window synthesis.
    TimeWindows,
}

impl RandomStream {
    fn offset(self) -> u64 {
        match self {
            RandomStream::Geometry => 0,
            RandomStream::Demand => 1,
            RandomStream::TimeWindows => 2,
        }
    }
}

/// Returns a seed for the given stream: a fixed, stream specific value in deterministic
/// mode, a value drawn from OS entropy otherwise.
pub fn get_seed(use_deterministic: bool, stream: RandomStream) -> u64 {
    if use_deterministic { DETERMINISTIC_BASE_SEED + stream.offset() } else { rand::thread_rng().next_u64() }
}

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i64, max: i64) -> i64;
}

/// A default random implementation over an explicitly seeded small generator.
pub struct DefaultRandom {
    rng: RwLock<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` seeded with the given value.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: RwLock::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RwLock::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i64, max: i64) -> i64 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.write().expect("cannot get RNG").gen_range(min..=max)
    }
}
