//! Password policies and constrained generation.

pub mod charset;
mod generate;
pub mod policy;

pub use generate::{generate, generate_batch, generate_secure, generate_using, generate_with};
pub use policy::{Policy, validate};
