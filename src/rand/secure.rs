//! Operating system CSPRNG. Failures surface as errors; there is no fallback.

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::RandomSource;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRng(OsRng);

impl SecureRng {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for SecureRng {
    fn index(&mut self, n: usize) -> Result<usize> {
        if n <= 1 {
            return Ok(0);
        }
        loop {
            let word = self.0.try_next_u64().inspect_err(|e| {
                log::warn!("os random source failed: {e}");
            })?;
            if let Some(idx) = reduce(word, n) {
                return Ok(idx);
            }
        }
    }
}

/// Map a uniform `u64` onto `[0, n)` without modulo bias, or `None` if the
/// word falls in the rejected low zone and must be redrawn.
#[inline]
fn reduce(word: u64, n: usize) -> Option<usize> {
    let bound = n as u64;
    // 2^64 mod bound: values below this would over-represent small residues
    let threshold = bound.wrapping_neg() % bound;
    (word >= threshold).then(|| (word % bound) as usize)
}
