//! Password generation.

use zeroize::Zeroizing;

use super::charset::CharClass;
use super::policy::Policy;
use crate::error::Result;
use crate::rand::{FastRng, Generator, RandomSource, SecureRng};

/// Generate a password with the process-wide fast source.
pub fn generate(policy: &Policy) -> Result<String> {
    generate_with(policy, &mut FastRng::shared())
}

/// Generate a password with the OS CSPRNG. Use this for real credentials.
pub fn generate_secure(policy: &Policy) -> Result<String> {
    generate_with(policy, &mut SecureRng::new())
}

/// Generate a password with the source named by `generator`.
pub fn generate_using(policy: &Policy, generator: Generator) -> Result<String> {
    match generator {
        Generator::Fast => generate(policy),
        Generator::Secure => generate_secure(policy),
    }
}

/// Generate `count` passwords from one source. The shared fast stream stays
/// locked for the whole batch.
pub fn generate_batch(policy: &Policy, generator: Generator, count: usize) -> Result<Vec<String>> {
    policy.validate()?;
    match generator {
        Generator::Fast => batch(policy, &mut FastRng::shared(), count),
        Generator::Secure => batch(policy, &mut SecureRng::new(), count),
    }
}

fn batch<R: RandomSource + ?Sized>(
    policy: &Policy,
    rng: &mut R,
    count: usize,
) -> Result<Vec<String>> {
    (0..count).map(|_| generate_with(policy, rng)).collect()
}

/// Generate a password satisfying `policy`, drawing every character and the
/// final shuffle from `rng`.
///
/// Required characters are drawn class by class (upper, lower, number,
/// symbol), the result is padded up to `min_length` from the classes with a
/// positive minimum only, and the whole sequence is shuffled.
pub fn generate_with<R: RandomSource + ?Sized>(policy: &Policy, rng: &mut R) -> Result<String> {
    policy.validate()?;

    let symbols = policy.effective_symbols();
    let min_length = to_usize(policy.min_length);
    let required: usize = CharClass::ALL.iter().map(|&c| to_usize(policy.min(c))).sum();

    let mut pass = Zeroizing::new(Vec::<char>::with_capacity(min_length.max(required)));
    let mut pool: Vec<char> = Vec::new();

    for class in CharClass::ALL {
        let min = to_usize(policy.min(class));
        if min == 0 {
            continue;
        }

        let chars: Vec<char> = match class {
            CharClass::Symbol => symbols.clone(),
            _ => class.default_chars().chars().collect(),
        };

        log::debug!("drawing {} {} char(s) from {}", min, class.name(), chars.len());
        draw(rng, min, &chars, &mut pass)?;
        pool.extend(chars);
    }

    if pass.len() < min_length {
        let shortfall = min_length - pass.len();
        log::debug!("padding {} char(s) from pool of {}", shortfall, pool.len());
        draw(rng, shortfall, &pool, &mut pass)?;
    }

    rng.shuffle(&mut pass)?;

    Ok(pass.iter().collect())
}

/// Append `count` independent draws (with replacement) from `chars`.
fn draw<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: usize,
    chars: &[char],
    out: &mut Vec<char>,
) -> Result<()> {
    for _ in 0..count {
        out.push(chars[rng.index(chars.len())?]);
    }
    Ok(())
}

// Validated counts are non-negative.
#[inline]
fn to_usize(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}
