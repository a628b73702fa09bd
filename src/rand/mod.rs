//! Random sources for password generation.
//!
//! Generation is written against [`RandomSource`]; [`FastRng`] and
//! [`SecureRng`] are the two concrete sources.

mod fast;
mod hw;
mod secure;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;

pub use fast::FastRng;
pub use secure::SecureRng;

/// Uniform draws over character sequences.
pub trait RandomSource {
    /// Uniform index in `[0, n)`. Returns 0 without drawing when `n <= 1`.
    fn index(&mut self, n: usize) -> Result<usize>;

    /// Fisher-Yates shuffle driven by [`RandomSource::index`].
    fn shuffle(&mut self, chars: &mut [char]) -> Result<()> {
        for i in (1..chars.len()).rev() {
            let j = self.index(i + 1)?;
            chars.swap(i, j);
        }
        Ok(())
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, n: usize) -> Result<usize> {
        (**self).index(n)
    }

    fn shuffle(&mut self, chars: &mut [char]) -> Result<()> {
        (**self).shuffle(chars)
    }
}

/// Which source a caller wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Generator {
    Fast,
    #[default]
    Secure,
}

#[derive(Debug, Error)]
#[error("unknown generator '{0}' (expected secure|c or fast|m)")]
pub struct UnknownGenerator(pub String);

impl FromStr for Generator {
    type Err = UnknownGenerator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" | "m" => Ok(Generator::Fast),
            "secure" | "c" => Ok(Generator::Secure),
            _ => Err(UnknownGenerator(s.to_string())),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Fast => write!(f, "fast"),
            Generator::Secure => write!(f, "secure"),
        }
    }
}

/// Human-readable description of where a generator's randomness comes from.
pub fn source_name(generator: Generator) -> &'static str {
    match generator {
        Generator::Fast => hw::source_name(),
        Generator::Secure => "os csprng",
    }
}
