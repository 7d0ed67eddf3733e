//! Shared random generator for delay and failure draws.

use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Cloneable handle to one random generator.
///
/// Clones share the same underlying state, so every wrapper and middleware
/// built from one injector draws from a single sequence. The lock is held
/// only for the duration of a single draw.
#[derive(Clone)]
pub struct RandomSource {
    rng: Arc<Mutex<SmallRng>>,
}

impl RandomSource {
    /// Create a source seeded from operating system entropy
    pub fn from_os_rng() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Create a deterministic source from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    /// Use the seed when present, operating system entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Draw a uniform value in `[0, 1)`
    pub fn unit(&self) -> f64 {
        self.rng.lock().random::<f64>()
    }

    /// Draw a uniform integer in the inclusive range `[lo, hi]`
    ///
    /// The pair is reordered when `lo > hi`.
    pub fn range_inclusive(&self, lo: u64, hi: u64) -> u64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.lock().random_range(lo..=hi)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}
