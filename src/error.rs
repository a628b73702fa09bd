//! Error types for policy validation and generation.

use rand::rand_core::OsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid password policy: {reason}")]
    InvalidPolicy { reason: PolicyViolation },

    /// The OS random source could not produce a value. Never retried.
    #[error("secure random source failed: {0}")]
    EntropySourceFailure(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<OsError> for Error {
    fn from(err: OsError) -> Self {
        Error::EntropySourceFailure(Box::new(err))
    }
}

impl From<PolicyViolation> for Error {
    fn from(reason: PolicyViolation) -> Self {
        Error::InvalidPolicy { reason }
    }
}

impl Error {
    /// The violated rule, if this is a policy error.
    pub fn violation(&self) -> Option<PolicyViolation> {
        match self {
            Error::InvalidPolicy { reason } => Some(*reason),
            Error::EntropySourceFailure(_) => None,
        }
    }
}

/// Which policy rule failed. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("minimum length must be greater than or equal to zero (0)")]
    NegativeMinLength,
    #[error("minimum lower case count must be greater than or equal to zero (0)")]
    NegativeMinLower,
    #[error("minimum number count must be greater than or equal to zero (0)")]
    NegativeMinNumber,
    #[error("minimum symbol count must be greater than or equal to zero (0)")]
    NegativeMinSymbol,
    #[error("minimum upper case count must be greater than or equal to zero (0)")]
    NegativeMinUpper,
    #[error("at least one character class must be required; upper, lower, number and symbol were all zero (0)")]
    NoClassRequired,
    #[error("symbols are required but the allowed symbol set is empty; leave it unset to use the default symbols")]
    EmptySymbolSet,
}
