//! Generate ASCII passwords that satisfy per-class minimum counts.
//!
//! ```
//! use asciipass::{Policy, generate_secure};
//!
//! let policy = Policy::new(16).with_upper(1).with_lower(1).with_number(1).with_symbol(1);
//! let password = generate_secure(&policy).unwrap();
//! assert_eq!(password.len(), 16);
//! ```

pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{Error, PolicyViolation, Result};
pub use pass::charset::{CharClass, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
pub use pass::{Policy, generate, generate_batch, generate_secure, generate_using, generate_with, validate};
pub use crate::rand::{FastRng, Generator, RandomSource, SecureRng};
