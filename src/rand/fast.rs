//! Seeded, non-cryptographic source. Not for credentials.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{RandomSource, hw};
use crate::error::Result;

// Process-wide stream, seeded on first use. The mutex serializes callers so
// concurrent generations never interleave draws from the same state.
static SHARED: LazyLock<Mutex<StdRng>> = LazyLock::new(|| {
    let seed = hw::seed();
    log::debug!("seeding shared fast rng from {}", hw::source_name());
    Mutex::new(StdRng::seed_from_u64(seed))
});

pub enum FastRng {
    Owned(StdRng),
    Shared(MutexGuard<'static, StdRng>),
}

impl FastRng {
    /// Independent stream; the same seed yields the same passwords.
    pub fn seeded(seed: u64) -> Self {
        FastRng::Owned(StdRng::seed_from_u64(seed))
    }

    /// Exclusive handle to the process-wide stream, held until dropped.
    pub fn shared() -> Self {
        FastRng::Shared(SHARED.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn rng(&mut self) -> &mut StdRng {
        match self {
            FastRng::Owned(rng) => rng,
            FastRng::Shared(guard) => &mut **guard,
        }
    }
}

impl RandomSource for FastRng {
    fn index(&mut self, n: usize) -> Result<usize> {
        if n <= 1 {
            return Ok(0);
        }
        Ok(self.rng().random_range(0..n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut FastRng, n: usize, count: usize) -> Vec<usize> {
        (0..count).map(|_| rng.index(n).unwrap()).collect()
    }

    #[test]
    fn same_seed_same_stream() {
        let a = draws(&mut FastRng::seeded(42), 62, 64);
        let b = draws(&mut FastRng::seeded(42), 62, 64);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = draws(&mut FastRng::seeded(1), 1000, 32);
        let b = draws(&mut FastRng::seeded(2), 1000, 32);
        assert_ne!(a, b);
    }

    #[test]
    fn indices_stay_in_range() {
        let mut rng = FastRng::seeded(7);
        for n in 1..100 {
            assert!(rng.index(n).unwrap() < n);
        }
        assert_eq!(rng.index(0).unwrap(), 0);
    }

    #[test]
    fn shared_handle_draws() {
        let mut rng = FastRng::shared();
        assert!(rng.index(10).unwrap() < 10);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut chars: Vec<char> = "abcdefghij".chars().collect();
        FastRng::seeded(3).shuffle(&mut chars).unwrap();
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        assert_eq!(sorted.iter().collect::<String>(), "abcdefghij");
    }
}
