//! Password composition policy and its validation.

use super::charset::{CharClass, SYMBOLS};
use crate::error::{PolicyViolation, Result};

/// Minimum character counts a generated password must satisfy.
///
/// Counts are signed so that a negative value reaches [`validate`] and is
/// rejected instead of being clamped. `allowed_symbols` distinguishes an
/// unset symbol set (`None`, use [`SYMBOLS`]) from an explicitly empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    pub min_length: i64,
    pub min_upper: i64,
    pub min_lower: i64,
    pub min_number: i64,
    pub min_symbol: i64,
    pub allowed_symbols: Option<Vec<char>>,
}

impl Policy {
    pub fn new(min_length: i64) -> Self {
        Self {
            min_length,
            ..Default::default()
        }
    }

    pub fn with_upper(mut self, n: i64) -> Self {
        self.min_upper = n;
        self
    }

    pub fn with_lower(mut self, n: i64) -> Self {
        self.min_lower = n;
        self
    }

    pub fn with_number(mut self, n: i64) -> Self {
        self.min_number = n;
        self
    }

    pub fn with_symbol(mut self, n: i64) -> Self {
        self.min_symbol = n;
        self
    }

    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.allowed_symbols = Some(symbols.into_iter().collect());
        self
    }

    /// Minimum count for `class`.
    pub fn min(&self, class: CharClass) -> i64 {
        match class {
            CharClass::Upper => self.min_upper,
            CharClass::Lower => self.min_lower,
            CharClass::Number => self.min_number,
            CharClass::Symbol => self.min_symbol,
        }
    }

    /// Symbols drawn from: the override when set, else [`SYMBOLS`].
    pub fn effective_symbols(&self) -> Vec<char> {
        match &self.allowed_symbols {
            Some(symbols) => symbols.clone(),
            None => SYMBOLS.chars().collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }
}

/// Check a policy for internal consistency. The first failing rule wins.
pub fn validate(policy: &Policy) -> Result<()> {
    if policy.min_length < 0 {
        return Err(PolicyViolation::NegativeMinLength.into());
    }
    if policy.min_lower < 0 {
        return Err(PolicyViolation::NegativeMinLower.into());
    }
    if policy.min_number < 0 {
        return Err(PolicyViolation::NegativeMinNumber.into());
    }
    if policy.min_symbol < 0 {
        return Err(PolicyViolation::NegativeMinSymbol.into());
    }
    if policy.min_upper < 0 {
        return Err(PolicyViolation::NegativeMinUpper.into());
    }

    if CharClass::ALL.iter().all(|&class| policy.min(class) == 0) {
        return Err(PolicyViolation::NoClassRequired.into());
    }

    if policy.min_symbol > 0 && policy.allowed_symbols.as_ref().is_some_and(Vec::is_empty) {
        return Err(PolicyViolation::EmptySymbolSet.into());
    }

    Ok(())
}
